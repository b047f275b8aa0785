//! Domain aggregates exposed by the service layer.

pub mod course;
pub mod parent;
pub mod room;
pub mod student;
