//! Application layer
//!
//! Orchestrates the timeline port and the banner renderer.

pub mod pipeline;

pub use pipeline::{Pipeline, PipelineSummary};
