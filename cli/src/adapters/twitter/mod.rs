//! Twitter adapter
//!
//! Application-only auth and user timeline retrieval over the v1.1 REST API.

pub mod client;
mod dump;

pub use client::{TwitterClient, DEFAULT_API_URL};
