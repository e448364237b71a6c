//! Pipeline types
//!
//! State trail and outcome of a single load.

use crate::decode::FeatureAnomaly;
use crate::types::{EarthquakeRecord, QueryResult};
use std::fmt;
use std::time::Duration;

/// Stage of one pipeline invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has started
    Idle,
    /// Fetcher is running
    Fetching,
    /// Fetch failed (terminal)
    FetchFailed,
    /// Body obtained
    Fetched,
    /// Decoder is running
    Decoding,
    /// Decode failed (terminal)
    DecodeFailed,
    /// Records produced (terminal)
    Decoded,
}

impl LoadState {
    /// Whether no further transition can happen
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::FetchFailed | Self::DecodeFailed | Self::Decoded)
    }

    /// Whether `next` is a legal successor of this state
    pub fn can_transition_to(self, next: LoadState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Fetching)
                | (Self::Fetching, Self::FetchFailed | Self::Fetched)
                | (Self::Fetched, Self::Decoding)
                | (Self::Decoding, Self::DecodeFailed | Self::Decoded)
        )
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::FetchFailed => "fetch-failed",
            Self::Fetched => "fetched",
            Self::Decoding => "decoding",
            Self::DecodeFailed => "decode-failed",
            Self::Decoded => "decoded",
        };
        f.write_str(name)
    }
}

/// Everything observed during one load
#[derive(Debug)]
pub struct LoadReport {
    /// Records or the terminal failure
    pub result: QueryResult,
    /// States visited, starting with `Idle`
    pub states: Vec<LoadState>,
    /// Features skipped by the decoder
    pub anomalies: Vec<FeatureAnomaly>,
    /// Wall time spent in the pipeline
    pub elapsed: Duration,
}

impl LoadReport {
    /// The state the load ended in
    pub fn final_state(&self) -> LoadState {
        self.states.last().copied().unwrap_or(LoadState::Idle)
    }

    /// Records on success, empty on failure
    pub fn records(&self) -> &[EarthquakeRecord] {
        self.result.as_deref().unwrap_or(&[])
    }

    /// Consume the report, keeping only the outcome
    pub fn into_result(self) -> QueryResult {
        self.result
    }
}
