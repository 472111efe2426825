//! Domain layer
//!
//! - `entities`: posts and the credentials used to fetch them
//! - `ports`: trait for the timeline API

pub mod entities;
pub mod ports;
