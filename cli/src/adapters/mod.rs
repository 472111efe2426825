//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod twitter;

pub use twitter::TwitterClient;
