//! Documentation page fetching.
//!
//! Provides a blocking HTTP client that downloads the documentation page
//! and hands the markup to [`extract_catalog`](super::extract_catalog).

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use crate::catalog::MethodCatalog;
use crate::error::{ProgressError, Result};

use super::extract::extract_catalog;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = concat!("apiprogress/", env!("CARGO_PKG_VERSION"));

/// Fetches the documentation page over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_options(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP fetcher with a custom timeout and User-Agent.
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download the page at `url` and return its body.
    ///
    /// Any non-success status is an error; there is no retry.
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("GET {} (timeout {:?})", url, self.timeout);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProgressError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text()?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Download the page at `url` and extract its method catalog.
    pub fn fetch(&self, url: &str) -> Result<MethodCatalog> {
        let html = self.fetch_html(url)?;
        extract_catalog(&html)
    }
}
