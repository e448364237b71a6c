//! Configuration for feed queries
//!
//! A [`FeedConfig`] is loaded from YAML. Every field has a default, so an
//! empty document is a valid config that queries the USGS endpoint.
//!
//! ```yaml
//! endpoint: https://earthquake.usgs.gov/fdsnws/event/1/query
//! limit: 20
//! min_magnitude: 4.5
//! order_by: magnitude
//! http:
//!   timeout_secs: 10
//!   headers:
//!     Accept: application/geo+json
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::query::{FeedQuery, DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_MIN_MAGNITUDE};
use crate::types::OrderBy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Top-Level Feed Config
// ============================================================================

/// Complete feed configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Base endpoint for event queries
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum number of events requested
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Minimum magnitude requested
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,

    /// Feed ordering
    #[serde(default)]
    pub order_by: OrderBy,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_min_magnitude() -> f64 {
    DEFAULT_MIN_MAGNITUDE
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
            min_magnitude: default_min_magnitude(),
            order_by: OrderBy::default(),
            http: HttpConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::invalid_value("limit", "must be at least 1"));
        }
        if !self.min_magnitude.is_finite() {
            return Err(Error::invalid_value(
                "min_magnitude",
                "must be a finite number",
            ));
        }
        Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", e.to_string()))?;
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "http.timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Query parameters described by this config
    pub fn query(&self) -> FeedQuery {
        FeedQuery::new(&self.endpoint)
            .limit(self.limit)
            .min_magnitude(self.min_magnitude)
            .order_by(self.order_by)
    }

    /// HTTP client settings described by this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.http.timeout_secs));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a feed config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<FeedConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load and validate a feed config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<FeedConfig> {
    // serde_yaml rejects an empty document, but an empty file means "all defaults"
    let config: FeedConfig = if yaml.trim().is_empty() {
        FeedConfig::default()
    } else {
        serde_yaml::from_str(yaml)?
    };
    config.validate()?;
    Ok(config)
}
