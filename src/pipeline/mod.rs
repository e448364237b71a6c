//! Load pipeline module
//!
//! Fetch then decode, one invocation at a time.
//!
//! # Overview
//!
//! The pipeline module provides:
//! - `QuakeLoader` - Composes a [`Fetcher`] and a [`FeedDecoder`]
//! - `LoadHandle` - A load running on a background tokio task
//! - `LoadState` / `LoadReport` - The per-invocation state trail and outcome
//!
//! ```text
//! Idle ─▶ Fetching ─┬─▶ FetchFailed
//!                   └─▶ Fetched ─▶ Decoding ─┬─▶ DecodeFailed
//!                                            └─▶ Decoded
//! ```
//!
//! [`Fetcher`]: crate::http::Fetcher
//! [`FeedDecoder`]: crate::decode::FeedDecoder

mod loader;
mod types;

pub use loader::{LoadHandle, QuakeLoader};
pub use types::{LoadReport, LoadState};
