//! Quake loader
//!
//! Runs fetch and decode for one URL and records every state it passes
//! through. The loader keeps no per-invocation state, so a single instance
//! can serve any number of concurrent loads.

use super::types::{LoadReport, LoadState};
use crate::decode::{FeatureAnomaly, FeedDecoder, GeoJsonDecoder};
use crate::error::{Error, LoadError, Result};
use crate::http::{Fetcher, HttpClientConfig, HttpFetcher};
use crate::types::QueryResult;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Fetch-then-decode pipeline
#[derive(Clone)]
pub struct QuakeLoader {
    fetcher: Arc<dyn Fetcher>,
    decoder: Arc<dyn FeedDecoder>,
}

impl QuakeLoader {
    /// Create a loader from explicit collaborators
    pub fn new(fetcher: Arc<dyn Fetcher>, decoder: Arc<dyn FeedDecoder>) -> Self {
        Self { fetcher, decoder }
    }

    /// Create a loader that fetches over HTTP and decodes GeoJSON
    pub fn with_http(config: HttpClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::with_config(config)?;
        Ok(Self::new(Arc::new(fetcher), Arc::new(GeoJsonDecoder::new())))
    }

    /// Load the records behind `url`
    ///
    /// An absent or blank URL means there is nothing to query and yields an
    /// empty success.
    pub async fn load(&self, url: Option<&str>) -> QueryResult {
        self.run(url).await.into_result()
    }

    /// Load the records behind `url`, keeping the state trail and anomalies
    pub async fn run(&self, url: Option<&str>) -> LoadReport {
        let start = Instant::now();
        let mut trail = Trail::new();

        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            debug!("No URL to load, returning empty result");
            return trail.finish(Ok(Vec::new()), Vec::new(), start);
        };

        trail.advance(LoadState::Fetching);
        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                trail.advance(LoadState::FetchFailed);
                warn!("Load of {url} failed while fetching: {e}");
                return trail.finish(Err(LoadError::Fetch(e)), Vec::new(), start);
            }
        };
        trail.advance(LoadState::Fetched);

        trail.advance(LoadState::Decoding);
        match self.decoder.decode_with_report(&body) {
            Ok(report) => {
                trail.advance(LoadState::Decoded);
                info!(
                    "Loaded {} earthquakes from {url} ({} features skipped)",
                    report.records.len(),
                    report.skipped()
                );
                trail.finish(Ok(report.records), report.anomalies, start)
            }
            Err(e) => {
                trail.advance(LoadState::DecodeFailed);
                warn!("Load of {url} failed while decoding: {e}");
                trail.finish(Err(LoadError::Decode(e)), Vec::new(), start)
            }
        }
    }

    /// Run a load on a background tokio task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, url: Option<String>) -> LoadHandle {
        let loader = self.clone();
        let inner = tokio::spawn(async move { loader.run(url.as_deref()).await });
        LoadHandle { inner }
    }
}

impl std::fmt::Debug for QuakeLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuakeLoader").finish_non_exhaustive()
    }
}

/// A load running on a background task
#[derive(Debug)]
pub struct LoadHandle {
    inner: JoinHandle<LoadReport>,
}

impl LoadHandle {
    /// Wait for the load and return its outcome
    pub async fn join(self) -> Result<QueryResult> {
        self.join_report().await.map(LoadReport::into_result)
    }

    /// Wait for the load and return the full report
    pub async fn join_report(self) -> Result<LoadReport> {
        self.inner.await.map_err(|e| {
            if e.is_cancelled() {
                Error::background("load was cancelled")
            } else {
                Error::background(format!("load task panicked: {e}"))
            }
        })
    }

    /// Discard the load
    ///
    /// The in-flight request future is dropped, which closes its connection.
    pub fn abort(&self) {
        self.inner.abort();
    }

    /// Whether the load has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

/// States visited by one invocation
struct Trail {
    states: Vec<LoadState>,
}

impl Trail {
    fn new() -> Self {
        Self {
            states: vec![LoadState::Idle],
        }
    }

    fn advance(&mut self, next: LoadState) {
        let current = self.states.last().copied().unwrap_or(LoadState::Idle);
        debug_assert!(
            current.can_transition_to(next),
            "illegal load transition {current} -> {next}"
        );
        debug!("Load state {current} -> {next}");
        self.states.push(next);
    }

    fn finish(
        self,
        result: QueryResult,
        anomalies: Vec<FeatureAnomaly>,
        start: Instant,
    ) -> LoadReport {
        LoadReport {
            result,
            states: self.states,
            anomalies,
            elapsed: start.elapsed(),
        }
    }
}
