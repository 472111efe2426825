//! Domain ports (traits)
//!
//! Adapters provide concrete implementations of these traits.

pub mod timeline;

pub use timeline::TimelineApi;
