//! reqwest-backed fetcher
//!
//! Sends a single GET, classifies transport failures and non-200 statuses,
//! and reads the body only on success.

use super::types::Fetcher;
use crate::error::{Error, FetchError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout (connect, send and body)
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("quakefeed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Fetcher that talks to the network through reqwest
pub struct HttpFetcher {
    client: Client,
    config: HttpClientConfig,
}

impl HttpFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Get the fetcher configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    #[allow(clippy::cast_possible_truncation)]
    fn timeout_ms(&self) -> u64 {
        self.config.timeout.as_millis() as u64
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let mut req = self.client.get(url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        debug!("GET {url}");
        let response = req.send().await.map_err(|e| {
            let err = FetchError::from_reqwest(url, &e, self.timeout_ms());
            warn!("Request failed: {err}");
            err
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            // Dropping the response here closes the connection without
            // reading the body.
            warn!("Unexpected status {} from {url}", status.as_u16());
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            let err = if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout_ms: self.timeout_ms(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            };
            warn!("Failed to read body: {err}");
            err
        })?;

        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
