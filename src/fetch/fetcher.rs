//! Fetcher trait for retrieving documentation pages

#[cfg(test)]
use mockall::automock;

use crate::fetch::error::FetchError;

/// Trait for fetching the raw text of a document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the document at `url`
    ///
    /// # Returns
    /// * `Ok(String)` - The response body
    /// * `Err(FetchError)` - If the request fails or the status is not 2xx
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
