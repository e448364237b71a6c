//! CLI module
//!
//! Command-line interface for querying the feed.
//!
//! # Commands
//!
//! - `fetch` - Load earthquakes from the feed
//! - `decode` - Decode a feed document saved on disk
//! - `url` - Print the query URL without fetching

mod commands;
mod display;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, QueryArgs};
pub use display::{format_magnitude, format_record, format_timestamp, split_place, LocationParts};
pub use runner::Runner;
