//! LMS admin server library.
//!
//! Database upgrades keyed by `dbinfo.dbversion`, the node group listing and
//! the HTTP layer serving it.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod upgrade;
pub mod views;
