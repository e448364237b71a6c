//! Decoder implementations

use super::types::{AnomalyKind, DecodeReport, FeatureAnomaly, FeedDecoder};
use crate::error::DecodeError;
use crate::types::{EarthquakeRecord, JsonObject};
use serde_json::Value;
use tracing::{debug, warn};

/// Top-level array holding the events
const FEATURES_KEY: &str = "features";

/// Per-feature object holding the event fields
const PROPERTIES_KEY: &str = "properties";

// ============================================================================
// GeoJSON Decoder
// ============================================================================

/// Decoder for the USGS GeoJSON summary format
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonDecoder;

impl GeoJsonDecoder {
    /// Create a new GeoJSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl FeedDecoder for GeoJsonDecoder {
    fn decode_with_report(&self, body: &str) -> Result<DecodeReport, DecodeError> {
        let document: Value = serde_json::from_str(body)
            .map_err(|e| DecodeError::invalid_json(e.to_string()))?;

        let root = document.as_object().ok_or(DecodeError::NotAnObject)?;
        let features = match root.get(FEATURES_KEY) {
            None | Some(Value::Null) => return Err(DecodeError::MissingFeatures),
            Some(Value::Array(features)) => features,
            Some(other) => {
                return Err(DecodeError::FeaturesNotArray {
                    found: json_type_name(other),
                })
            }
        };

        let mut report = DecodeReport {
            records: Vec::with_capacity(features.len()),
            anomalies: Vec::new(),
            feature_count: features.len(),
        };

        for (index, feature) in features.iter().enumerate() {
            match extract_record(feature) {
                Ok(record) => report.records.push(record),
                Err(kind) => {
                    warn!("Skipping malformed feature {index}: {kind}");
                    report.anomalies.push(FeatureAnomaly { index, kind });
                }
            }
        }

        debug!(
            "Decoded {} of {} features ({} skipped)",
            report.records.len(),
            report.feature_count,
            report.skipped()
        );
        Ok(report)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a record from one feature, or say why it cannot be built
fn extract_record(feature: &Value) -> Result<EarthquakeRecord, AnomalyKind> {
    let feature = feature.as_object().ok_or(AnomalyKind::NotAnObject)?;
    let properties = feature
        .get(PROPERTIES_KEY)
        .and_then(Value::as_object)
        .ok_or(AnomalyKind::MissingProperties)?;

    let magnitude = number_field(properties, "mag")?;
    let place = string_field(properties, "place")?;
    let time = integer_field(properties, "time")?;
    let url = string_field(properties, "url")?;

    Ok(EarthquakeRecord::new(magnitude, place, time, url))
}

/// Look up a field, treating JSON null the same as absent
fn required<'a>(
    properties: &'a JsonObject,
    field: &'static str,
) -> Result<&'a Value, AnomalyKind> {
    match properties.get(field) {
        None | Some(Value::Null) => Err(AnomalyKind::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn number_field(properties: &JsonObject, field: &'static str) -> Result<f64, AnomalyKind> {
    let value = required(properties, field)?;
    value.as_f64().ok_or(AnomalyKind::WrongType {
        field,
        expected: "a number",
        found: json_type_name(value),
    })
}

fn integer_field(properties: &JsonObject, field: &'static str) -> Result<i64, AnomalyKind> {
    let value = required(properties, field)?;
    value.as_i64().ok_or(AnomalyKind::WrongType {
        field,
        expected: "an integer",
        found: json_type_name(value),
    })
}

fn string_field<'a>(
    properties: &'a JsonObject,
    field: &'static str,
) -> Result<&'a str, AnomalyKind> {
    let value = required(properties, field)?;
    value.as_str().ok_or(AnomalyKind::WrongType {
        field,
        expected: "a string",
        found: json_type_name(value),
    })
}

/// Describe a JSON value's type for diagnostics
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a floating-point number",
        Value::Number(n) if n.is_u64() && !n.is_i64() => "an out-of-range integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
