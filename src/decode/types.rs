//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::DecodeError;
use crate::types::EarthquakeRecord;
use std::fmt;

/// Trait for decoding a feed body into earthquake records
pub trait FeedDecoder: Send + Sync {
    /// Decode the body into records, in feed order
    fn decode(&self, body: &str) -> Result<Vec<EarthquakeRecord>, DecodeError> {
        self.decode_with_report(body).map(|report| report.records)
    }

    /// Decode the body and keep the per-feature anomalies
    fn decode_with_report(&self, body: &str) -> Result<DecodeReport, DecodeError>;
}

/// Result of decoding one feed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    /// Records that decoded cleanly, in feed order
    pub records: Vec<EarthquakeRecord>,
    /// Features that were skipped
    pub anomalies: Vec<FeatureAnomaly>,
    /// Number of entries in the `features` array
    pub feature_count: usize,
}

impl DecodeReport {
    /// Number of features that were skipped
    pub fn skipped(&self) -> usize {
        self.anomalies.len()
    }

    /// Whether every feature produced a record
    pub fn is_complete(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// A feature that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureAnomaly {
    /// Position of the feature in the `features` array
    pub index: usize,
    /// What was wrong with it
    pub kind: AnomalyKind,
}

impl fmt::Display for FeatureAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature {}: {}", self.index, self.kind)
    }
}

/// Why a feature was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    /// The array element is not a JSON object
    NotAnObject,
    /// No `properties` object on the feature
    MissingProperties,
    /// A required property is absent or null
    MissingField { field: &'static str },
    /// A required property has the wrong JSON type
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("not a JSON object"),
            Self::MissingProperties => f.write_str("missing 'properties' object"),
            Self::MissingField { field } => write!(f, "missing '{field}'"),
            Self::WrongType {
                field,
                expected,
                found,
            } => write!(f, "'{field}' is {found}, expected {expected}"),
        }
    }
}
