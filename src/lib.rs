//! # quakefeed
//!
//! Fetches a USGS GeoJSON earthquake feed and decodes it into flat,
//! immutable [`EarthquakeRecord`]s.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quakefeed::{FeedQuery, HttpClientConfig, QuakeLoader};
//!
//! #[tokio::main]
//! async fn main() -> quakefeed::Result<()> {
//!     let url = FeedQuery::default().min_magnitude(6.0).build()?;
//!     let loader = QuakeLoader::with_http(HttpClientConfig::default())?;
//!
//!     // Runs on a background task; the caller only awaits the handle
//!     let records = loader.spawn(Some(url)).join().await??;
//!     for quake in &records {
//!         println!("{:.1} {}", quake.magnitude(), quake.place());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   FeedQuery ──url──▶ QuakeLoader::load / spawn
//!                        │
//!            ┌───────────┴────────────┐
//!            ▼                        ▼
//!     Fetcher (http)           FeedDecoder (decode)
//!     one GET, 200 only        features[] → records,
//!     FetchError otherwise     malformed features skipped
//!            │                        │
//!            └──────▶ QueryResult ◀───┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pipeline and its surroundings
pub mod error;

/// Common types and type aliases
pub mod types;

/// Single-attempt HTTP fetching
pub mod http;

/// GeoJSON feed decoding
pub mod decode;

/// Fetch-then-decode pipeline
pub mod pipeline;

/// Query URL construction
pub mod query;

/// YAML feed configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{DecodeError, Error, FetchError, LoadError, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, FeedConfig};
pub use decode::{FeedDecoder, GeoJsonDecoder};
pub use http::{Fetcher, HttpClientConfig, HttpFetcher};
pub use pipeline::{LoadHandle, LoadReport, LoadState, QuakeLoader};
pub use query::FeedQuery;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
