//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, QueryArgs};
use crate::cli::display::format_record;
use crate::config::{load_config, FeedConfig};
use crate::decode::{FeedDecoder, GeoJsonDecoder};
use crate::error::{Error, Result};
use crate::pipeline::QuakeLoader;
use crate::query::FeedQuery;
use crate::types::EarthquakeRecord;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch { url, query } => self.fetch(url.as_deref(), query).await,
            Commands::Decode { file } => self.decode(file),
            Commands::Url { query } => self.url(query),
        }
    }

    /// Load the config file, or defaults when none was given
    fn load_config(&self) -> Result<FeedConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(FeedConfig::default()),
        }
    }

    /// Apply command-line overrides on top of the config and validate the result
    fn build_query(config: &FeedConfig, args: &QueryArgs) -> Result<FeedQuery> {
        let mut config = config.clone();
        if let Some(endpoint) = &args.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(limit) = args.limit {
            config.limit = limit;
        }
        if let Some(min_magnitude) = args.min_magnitude {
            config.min_magnitude = min_magnitude;
        }
        if let Some(order_by) = args.order_by {
            config.order_by = order_by;
        }
        config.validate()?;
        Ok(config.query())
    }

    /// Fetch and print earthquakes
    async fn fetch(&self, url: Option<&str>, args: &QueryArgs) -> Result<()> {
        let config = self.load_config()?;
        let url = match url {
            Some(url) => url.to_string(),
            None => Self::build_query(&config, args)?.build()?,
        };
        info!("Querying {url}");

        let loader = QuakeLoader::with_http(config.http_client_config())?;
        let report = loader.spawn(Some(url)).join_report().await?;

        if !report.anomalies.is_empty() {
            warn!("{} malformed features were skipped", report.anomalies.len());
        }
        info!(
            "Load finished in {:?} ({})",
            report.elapsed,
            report.final_state()
        );

        let records = report.into_result()?;
        self.output_records(&records)
    }

    /// Decode a saved feed document and print its records
    fn decode(&self, file: &Path) -> Result<()> {
        let body = fs::read_to_string(file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: file.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let report = GeoJsonDecoder::new().decode_with_report(&body)?;
        for anomaly in &report.anomalies {
            eprintln!("skipped {anomaly}");
        }
        eprintln!(
            "Decoded {} of {} features ({} skipped)",
            report.records.len(),
            report.feature_count,
            report.skipped()
        );

        self.output_records(&report.records)
    }

    /// Print the query URL
    fn url(&self, args: &QueryArgs) -> Result<()> {
        let config = self.load_config()?;
        println!("{}", Self::build_query(&config, args)?.build()?);
        Ok(())
    }

    /// Output records in the selected format
    fn output_records(&self, records: &[EarthquakeRecord]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for record in records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
            OutputFormat::Pretty => {
                if records.is_empty() {
                    println!("No earthquakes found.");
                }
                for record in records {
                    println!("{}", format_record(record));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderBy;
    use clap::Parser;

    #[test]
    fn test_parse_fetch_with_overrides() {
        let cli = Cli::parse_from([
            "quakefeed",
            "fetch",
            "--limit",
            "3",
            "--min-magnitude",
            "2.5",
            "--order-by",
            "magnitude",
        ]);
        let Commands::Fetch { url, query } = cli.command else {
            panic!("expected fetch command");
        };
        assert!(url.is_none());
        assert_eq!(query.limit, Some(3));
        assert_eq!(query.order_by, Some(OrderBy::Magnitude));
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_parse_url_conflicts_with_query_flags() {
        let result = Cli::try_parse_from([
            "quakefeed",
            "fetch",
            "--url",
            "http://localhost/q",
            "--limit",
            "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "quakefeed",
            "decode",
            "--file",
            "feed.json",
            "-f",
            "json",
            "-v",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_build_query_applies_overrides() {
        let config = FeedConfig::default();
        let args = QueryArgs {
            endpoint: Some("http://localhost:9000/query".to_string()),
            limit: Some(50),
            min_magnitude: None,
            order_by: Some(OrderBy::Magnitude),
        };

        let query = Runner::build_query(&config, &args).unwrap();
        assert_eq!(query.endpoint, "http://localhost:9000/query");
        assert_eq!(query.limit, 50);
        assert!((query.min_magnitude - config.min_magnitude).abs() < f64::EPSILON);
        assert_eq!(query.order_by, OrderBy::Magnitude);
    }

    #[test]
    fn test_build_query_rejects_invalid_overrides() {
        let config = FeedConfig::default();
        let args = QueryArgs {
            endpoint: Some("earthquakes please".to_string()),
            limit: None,
            min_magnitude: None,
            order_by: None,
        };

        let err = Runner::build_query(&config, &args).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "endpoint"
        ));
    }

    #[tokio::test]
    async fn test_url_rejects_zero_limit() {
        let cli = Cli::parse_from(["quakefeed", "url", "--limit", "0"]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "limit"
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_zero_limit_before_requesting() {
        let cli = Cli::parse_from([
            "quakefeed",
            "fetch",
            "--endpoint",
            "http://127.0.0.1:1/query",
            "--limit",
            "0",
        ]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[tokio::test]
    async fn test_decode_missing_file() {
        let cli = Cli::parse_from(["quakefeed", "decode", "--file", "/nonexistent/feed.json"]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_decode_invalid_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(&path, "not json").unwrap();

        let cli = Cli::parse_from(["quakefeed", "decode", "--file", path.to_str().unwrap()]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Load(crate::error::LoadError::Decode(_))
        ));
    }
}
