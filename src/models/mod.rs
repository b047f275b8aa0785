//! Database models backing the repository layer.

pub mod config;
pub mod course;
pub mod parent;
pub mod room;
pub mod student;
