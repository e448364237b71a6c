//! Feed query URL construction
//!
//! Builds the FDSN event query URL (`format`, `limit`, `minmag`, `orderby`)
//! that the pipeline receives as one opaque string.

use crate::error::{Error, Result};
use crate::types::OrderBy;
use url::Url;

/// USGS FDSN event query endpoint
pub const DEFAULT_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Default number of events requested
pub const DEFAULT_LIMIT: u32 = 10;

/// Default minimum magnitude
pub const DEFAULT_MIN_MAGNITUDE: f64 = 5.0;

/// Parameters of one feed query
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    pub endpoint: String,
    pub limit: u32,
    pub min_magnitude: f64,
    pub order_by: OrderBy,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            order_by: OrderBy::default(),
        }
    }
}

impl FeedQuery {
    /// Create a query against the given endpoint with default parameters
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn min_magnitude(mut self, min_magnitude: f64) -> Self {
        self.min_magnitude = min_magnitude;
        self
    }

    #[must_use]
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Build the request URL
    ///
    /// Query parameters already present on the endpoint are kept; the feed
    /// parameters are appended after them.
    pub fn to_url(&self) -> Result<Url> {
        if !self.min_magnitude.is_finite() {
            return Err(Error::invalid_value(
                "min_magnitude",
                format!("must be a finite number, got {}", self.min_magnitude),
            ));
        }

        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("format", "geojson")
            .append_pair("limit", &self.limit.to_string())
            .append_pair("minmag", &self.min_magnitude.to_string())
            .append_pair("orderby", self.order_by.as_str());
        Ok(url)
    }

    /// Build the request URL as a string
    pub fn build(&self) -> Result<String> {
        self.to_url().map(String::from)
    }
}
