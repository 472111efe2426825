//! Error types for tweetfmt
//!
//! - `TimelineError`: timeline API client errors
//! - `PipelineError`: fetch-and-print pipeline errors, one variant per stage

use thiserror::Error;

/// Timeline API client errors
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - rejected credentials or token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Empty bearer token")]
    EmptyToken,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Could not retrieve bearer token: {0}")]
    Credentials(#[source] TimelineError),

    #[error("Could not fetch timeline: {0}")]
    Fetch(#[source] TimelineError),

    #[error("Could not write banner: {0}")]
    Output(#[from] std::io::Error),

    #[error("Pipeline task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(e: tokio::task::JoinError) -> Self {
        PipelineError::Task(e.to_string())
    }
}
