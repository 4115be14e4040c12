//! Portrait image client.
//!
//! A trait-based HTTP client for downloading member portraits from the
//! public image origins. The trait abstraction enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with `MockHttpServer` in integration tests
//! - Pointing the fetchers at a different origin without code changes
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use tinycongress_scrapers::congress::{HttpPortraitClient, PortraitClient, PortraitSource};
//!
//! let client = HttpPortraitClient::new("Mozilla/5.0", Duration::from_secs(30))?;
//! let source = PortraitSource::bioguide("https://bioguide.congress.gov/bioguide/photo");
//! let bytes = client.fetch_portrait(&source.portrait_url("V000137")).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use thiserror::Error;

/// Errors that can occur when downloading a portrait.
#[derive(Debug, Error)]
pub enum PortraitApiError {
    /// Transport failure: DNS, connect, TLS, timeout, or a broken body stream
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Origin has no portrait at this URL
    #[error("HTTP Error 404: Not Found ({url})")]
    NotFound { url: String },

    /// Origin answered with any other non-success status
    #[error("HTTP Error {status} ({url})")]
    Status { status: u16, url: String },
}

/// Trait for portrait download operations.
///
/// Use `HttpPortraitClient` for real HTTP calls, or
/// `mock::MockPortraitClient` in tests.
#[async_trait]
pub trait PortraitClient: Send + Sync {
    /// Download the image at `url` and return its body.
    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, PortraitApiError>;
}

/// HTTP-based implementation of `PortraitClient`.
///
/// Every request carries a browser-like `User-Agent`; both origins reject
/// the reqwest default.
pub struct HttpPortraitClient {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpPortraitClient {
    /// Create a client with the given user agent and per-request timeout.
    ///
    /// # Errors
    /// Returns an error if the underlying TLS backend cannot be initialized.
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Result<Self, PortraitApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, user_agent))
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    pub fn with_client(client: reqwest::Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl PortraitClient for HttpPortraitClient {
    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, PortraitApiError> {
        tracing::debug!(url, "requesting portrait");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PortraitApiError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(PortraitApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{PortraitApiError, PortraitClient};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    enum Stub {
        Body(Vec<u8>),
        Status(u16),
    }

    /// Mock implementation of `PortraitClient` for unit tests.
    ///
    /// Stub responses per URL with `respond_with_body` / `respond_with_status`
    /// and verify traffic with `calls()`. Unstubbed URLs answer 404.
    pub struct MockPortraitClient {
        stubs: Mutex<HashMap<String, Stub>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPortraitClient {
        pub fn new() -> Self {
            Self {
                stubs: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Answer `url` with a 200 and the given body.
        pub fn respond_with_body(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
            self.stubs
                .lock()
                .unwrap()
                .insert(url.into(), Stub::Body(body.into()));
        }

        /// Answer `url` with the given HTTP status and no body.
        pub fn respond_with_status(&self, url: impl Into<String>, status: u16) {
            self.stubs
                .lock()
                .unwrap()
                .insert(url.into(), Stub::Status(status));
        }

        /// All URLs requested so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPortraitClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PortraitClient for MockPortraitClient {
        async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, PortraitApiError> {
            self.calls.lock().unwrap().push(url.to_string());

            let stub = self.stubs.lock().unwrap().get(url).cloned();
            match stub {
                Some(Stub::Body(body)) => Ok(body),
                Some(Stub::Status(status)) if status != 404 => Err(PortraitApiError::Status {
                    status,
                    url: url.to_string(),
                }),
                Some(Stub::Status(_)) | None => Err(PortraitApiError::NotFound {
                    url: url.to_string(),
                }),
            }
        }
    }
}
