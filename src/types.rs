//! Common types used throughout quakefeed
//!
//! This module contains the earthquake record, the query ordering enum,
//! and the pipeline result alias.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON object type
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Outcome of one pipeline invocation
///
/// An empty vector is a successful load with zero matching events and is
/// distinct from a failure.
pub type QueryResult = std::result::Result<Vec<EarthquakeRecord>, LoadError>;

// ============================================================================
// Earthquake Record
// ============================================================================

/// One decoded earthquake event
///
/// Values are carried exactly as the feed reported them: magnitudes outside
/// 0-10, timestamps far in the past or future and URLs that do not parse are
/// all kept as-is.
///
/// Records come only from a decoder; they cannot be deserialized directly.
///
/// ```compile_fail
/// let record: quakefeed::EarthquakeRecord = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeRecord {
    magnitude: f64,
    place: String,
    occurred_at_millis: i64,
    detail_url: String,
}

impl EarthquakeRecord {
    pub(crate) fn new(
        magnitude: f64,
        place: impl Into<String>,
        occurred_at_millis: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            place: place.into(),
            occurred_at_millis,
            detail_url: detail_url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    /// Event time in milliseconds since the Unix epoch
    pub fn occurred_at_millis(&self) -> i64 {
        self.occurred_at_millis
    }

    /// Link to the feed's per-event detail page
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

// ============================================================================
// Query Ordering
// ============================================================================

/// Sort order requested from the feed (`orderby` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Most recent first
    #[default]
    Time,
    /// Largest magnitude first
    Magnitude,
}

impl OrderBy {
    /// The value sent on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Magnitude => "magnitude",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "magnitude" => Ok(Self::Magnitude),
            other => Err(crate::error::Error::invalid_value(
                "order_by",
                format!("expected 'time' or 'magnitude', got '{other}'"),
            )),
        }
    }
}
