//! Fetcher trait

use crate::error::FetchError;
use async_trait::async_trait;

/// Source of raw feed text
///
/// Implementations perform a single attempt and release any connection
/// before returning, whether the attempt succeeded or not.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET the URL and return the full response body
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
