//! CLI commands and argument parsing

use crate::types::OrderBy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fetch and decode USGS earthquake feeds
#[derive(Parser, Debug)]
#[command(name = "quakefeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Feed configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load earthquakes from the feed
    Fetch {
        /// Full query URL (skips URL construction from config and flags)
        #[arg(long, conflicts_with_all = ["endpoint", "limit", "min_magnitude", "order_by"])]
        url: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Decode a feed document saved on disk
    Decode {
        /// GeoJSON file to decode
        #[arg(long)]
        file: PathBuf,
    },

    /// Print the query URL without fetching
    Url {
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Overrides for the configured query
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Query endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum number of events
    #[arg(long)]
    pub limit: Option<u32>,

    /// Minimum magnitude
    #[arg(long)]
    pub min_magnitude: Option<f64>,

    /// Feed ordering (time or magnitude)
    #[arg(long)]
    pub order_by: Option<OrderBy>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
