//! HTTP fetch module
//!
//! Performs one GET per call and hands back the body text.
//!
//! # Features
//!
//! - **Single attempt**: No retries or backoff; the caller decides whether to try again
//! - **Strict success**: Only `200 OK` yields a body, every other status is a [`FetchError`]
//! - **Scoped connections**: Responses are dropped on every exit path, including cancellation
//!
//! [`FetchError`]: crate::error::FetchError

mod client;
mod types;

pub use client::{HttpClientConfig, HttpClientConfigBuilder, HttpFetcher};
pub use types::Fetcher;
