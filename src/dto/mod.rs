//! DTO modules that bridge services with templates and APIs.

pub mod api;
pub mod listing;
pub mod main;
pub mod parents;
pub mod rooms;
pub mod students;
