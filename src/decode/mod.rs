//! Feed decoder module
//!
//! # Overview
//!
//! Turns a GeoJSON feature collection into flat [`EarthquakeRecord`]s.
//! The document as a whole must be valid JSON with a top-level `features`
//! array, otherwise decoding fails. Individual features that are missing a
//! field or carry the wrong JSON type are skipped and reported as
//! [`FeatureAnomaly`] values, so a partially corrupt feed still yields every
//! usable record.
//!
//! [`EarthquakeRecord`]: crate::types::EarthquakeRecord

mod decoders;
mod types;

pub use decoders::GeoJsonDecoder;
pub use types::{AnomalyKind, DecodeReport, FeatureAnomaly, FeedDecoder};
