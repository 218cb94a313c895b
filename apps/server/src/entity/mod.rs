//! SeaORM entity definitions for the LMS tables used by this server.

pub mod assignment;
pub mod dbinfo;
pub mod nodegroup;
pub mod nodegroup_assignment;
