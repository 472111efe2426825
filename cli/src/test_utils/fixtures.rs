//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{BearerToken, ConsumerCredentials, Post};

pub fn test_credentials() -> ConsumerCredentials {
    ConsumerCredentials::new("test-key", "test-secret")
}

pub fn test_token() -> BearerToken {
    BearerToken::new("test-token")
}

pub fn test_post(text: &str) -> Post {
    Post::new(text)
}

/// `count` posts with distinct single-line texts
pub fn test_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post {
            id_str: Some((1000 + i).to_string()),
            text: format!("post number {} ┻━┻", i),
        })
        .collect()
}
