//! Twitter API client implementation

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use urlencoding::encode;

use super::dump;
use crate::domain::entities::{BearerToken, ConsumerCredentials, Post};
use crate::domain::ports::TimelineApi;
use crate::error::TimelineError;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";
const CLIENT_CREDENTIALS_GRANT: &str = "grant_type=client_credentials";

/// Implementation of the timeline API over HTTPS
pub struct TwitterClient {
    http: Client,
    base_url: String,
    debug: bool,
}

impl TwitterClient {
    /// Create a client for `base_url`. With `debug` set, every request and
    /// response is dumped at DEBUG level.
    pub fn new(base_url: &str, debug: bool) -> Result<Self, TimelineError> {
        let http = Client::builder()
            .gzip(true)
            .user_agent(concat!("tweetfmt/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            debug,
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn timeline_url(&self, account: &str, count: u32) -> String {
        format!(
            "{}?count={}&screen_name={}",
            self.api_url("/1.1/statuses/user_timeline.json"),
            count,
            encode(account)
        )
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, TimelineError> {
        if self.debug {
            dump::log_request(&request);
        }

        let response = self.http.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if self.debug {
            dump::log_response(status, &headers, &body);
        }

        decode_body(status, &body)
    }
}

fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, TimelineError> {
    if status.is_success() {
        serde_json::from_str(body).map_err(|e| TimelineError::Deserialization(e.to_string()))
    } else if status == StatusCode::UNAUTHORIZED {
        Err(TimelineError::Unauthorized)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        Err(TimelineError::RateLimited)
    } else {
        Err(TimelineError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        })
    }
}

fn basic_auth_value(credentials: &ConsumerCredentials) -> String {
    let pair = format!("{}:{}", credentials.key, credentials.secret);
    format!("Basic {}", STANDARD.encode(pair))
}

/// Response types from the API
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token_type: Option<String>,
    access_token: String,
}

impl TryFrom<TokenResponse> for BearerToken {
    type Error = TimelineError;

    fn try_from(r: TokenResponse) -> Result<Self, Self::Error> {
        if let Some(token_type) = r.token_type.as_deref() {
            if !token_type.eq_ignore_ascii_case("bearer") {
                return Err(TimelineError::Deserialization(format!(
                    "unexpected token type: {}",
                    token_type
                )));
            }
        }
        if r.access_token.is_empty() {
            return Err(TimelineError::EmptyToken);
        }
        Ok(BearerToken::new(r.access_token))
    }
}

#[async_trait]
impl TimelineApi for TwitterClient {
    async fn fetch_bearer_token(
        &self,
        credentials: &ConsumerCredentials,
    ) -> Result<BearerToken, TimelineError> {
        if !credentials.is_complete() {
            return Err(TimelineError::InvalidRequest(
                "consumer key and secret must not be empty".to_string(),
            ));
        }

        let request = self
            .http
            .post(self.api_url("/oauth2/token"))
            .header(AUTHORIZATION, basic_auth_value(credentials))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(CLIENT_CREDENTIALS_GRANT)
            .build()?;

        let response: TokenResponse = self.execute(request).await?;
        let token = BearerToken::try_from(response)?;
        tracing::info!("Obtained bearer token");
        Ok(token)
    }

    async fn fetch_timeline(
        &self,
        token: &BearerToken,
        account: &str,
        count: u32,
    ) -> Result<Vec<Post>, TimelineError> {
        if token.is_empty() {
            return Err(TimelineError::EmptyToken);
        }
        if account.is_empty() {
            return Err(TimelineError::InvalidRequest(
                "account must not be empty".to_string(),
            ));
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let request = self
            .http
            .get(self.timeline_url(account, count))
            .bearer_auth(token.as_str())
            .build()?;

        let mut posts: Vec<Post> = self.execute(request).await?;
        // count is an upper bound the API does not always honor
        posts.truncate(count as usize);
        tracing::info!(account, fetched = posts.len(), "Fetched timeline");
        Ok(posts)
    }
}
