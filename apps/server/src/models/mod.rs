//! Domain models for the LMS admin server.

pub mod nodegroup;

pub use nodegroup::{ListSummary, NodeGroupList, NodeGroupRow};
