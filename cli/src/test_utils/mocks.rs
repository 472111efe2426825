//! Mock implementations of port traits
//!
//! In-memory timeline API that can be configured to succeed or fail and
//! records the requests it receives.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{BearerToken, ConsumerCredentials, Post};
use crate::domain::ports::TimelineApi;
use crate::error::TimelineError;

pub struct MockTimelineApi {
    posts: Vec<Post>,
    token: String,
    fail_auth: bool,
    fail_fetch: bool,
    /// Consumer keys passed to `fetch_bearer_token`
    pub token_requests: Arc<RwLock<Vec<String>>>,
    /// (account, count) passed to `fetch_timeline`
    pub fetch_requests: Arc<RwLock<Vec<(String, u32)>>>,
}

impl Default for MockTimelineApi {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            token: "test-token".to_string(),
            fail_auth: false,
            fail_fetch: false,
            token_requests: Arc::new(RwLock::new(Vec::new())),
            fetch_requests: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockTimelineApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credential exchange answers 401
    pub fn failing_auth() -> Self {
        Self {
            fail_auth: true,
            ..Self::default()
        }
    }

    /// Timeline fetch answers 500
    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }
}

#[async_trait]
impl TimelineApi for MockTimelineApi {
    async fn fetch_bearer_token(
        &self,
        credentials: &ConsumerCredentials,
    ) -> Result<BearerToken, TimelineError> {
        self.token_requests
            .write()
            .unwrap()
            .push(credentials.key.clone());

        if self.fail_auth {
            return Err(TimelineError::Unauthorized);
        }
        if self.token.is_empty() {
            return Err(TimelineError::EmptyToken);
        }
        Ok(BearerToken::new(self.token.clone()))
    }

    async fn fetch_timeline(
        &self,
        token: &BearerToken,
        account: &str,
        count: u32,
    ) -> Result<Vec<Post>, TimelineError> {
        self.fetch_requests
            .write()
            .unwrap()
            .push((account.to_string(), count));

        if token.is_empty() {
            return Err(TimelineError::EmptyToken);
        }
        if self.fail_fetch {
            return Err(TimelineError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        Ok(self.posts.iter().take(count as usize).cloned().collect())
    }
}
