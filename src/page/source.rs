//! Page source trait for fetching the release page

#[cfg(test)]
use mockall::automock;

use crate::error::ResolveError;

/// Trait for fetching the HTML of a release page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page body
    ///
    /// # Returns
    /// * `Ok(String)` - The response body of a 2xx response
    /// * `Err(ResolveError)` - Network failure, timeout, or non-2xx status
    async fn fetch(&self, url: &str) -> Result<String, ResolveError>;
}
