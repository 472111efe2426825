//! Timeline API port trait

use async_trait::async_trait;

use crate::domain::entities::{BearerToken, ConsumerCredentials, Post};
use crate::error::TimelineError;

/// Port trait for the social timeline API
#[async_trait]
pub trait TimelineApi: Send + Sync {
    /// Exchange consumer credentials for an application bearer token
    async fn fetch_bearer_token(
        &self,
        credentials: &ConsumerCredentials,
    ) -> Result<BearerToken, TimelineError>;

    /// Fetch up to `count` of the most recent posts from `account`, newest first
    async fn fetch_timeline(
        &self,
        token: &BearerToken,
        account: &str,
        count: u32,
    ) -> Result<Vec<Post>, TimelineError>;
}
