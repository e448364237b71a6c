//! Human-readable record formatting
//!
//! Only the CLI uses this. Records themselves keep the feed's raw values.

use crate::types::EarthquakeRecord;
use chrono::{DateTime, Utc};

/// Separator between an offset ("10km SW") and a primary location
const LOCATION_SEPARATOR: &str = " of ";

/// Offset used when the place has no separator
const NEAR_THE: &str = "Near the";

/// A place split into its display parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    /// Distance and bearing, e.g. "10km SW of"
    pub offset: String,
    /// Named location, e.g. "Testville"
    pub primary: String,
}

/// Split a feed place into offset and primary location
pub fn split_place(place: &str) -> LocationParts {
    match place.split_once(LOCATION_SEPARATOR) {
        Some((offset, primary)) => LocationParts {
            offset: format!("{offset}{}", LOCATION_SEPARATOR.trim_end()),
            primary: primary.to_string(),
        },
        None => LocationParts {
            offset: NEAR_THE.to_string(),
            primary: place.to_string(),
        },
    }
}

/// Magnitude with exactly one decimal place
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude:.1}")
}

/// Date and time in UTC, e.g. ("Jul 14, 2017", "2:40 AM")
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn format_timestamp(millis: i64) -> Option<(String, String)> {
    let time = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some((
        time.format("%b %d, %Y").to_string(),
        time.format("%-I:%M %p").to_string(),
    ))
}

/// One line describing a record
pub fn format_record(record: &EarthquakeRecord) -> String {
    let location = split_place(record.place());
    let when = match format_timestamp(record.occurred_at_millis()) {
        Some((date, time)) => format!("{date} {time} UTC"),
        None => format!("@{}ms", record.occurred_at_millis()),
    };
    format!(
        "{:>5}  {} {}  {}  {}",
        format_magnitude(record.magnitude()),
        location.offset,
        location.primary,
        when,
        record.detail_url()
    )
}
