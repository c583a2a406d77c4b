//! HTTP page source backed by reqwest

use std::time::Duration;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::page::source::PageSource;
use tracing::{debug, warn};

/// Fetches pages with a browser-like User-Agent and a bounded timeout
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ResolveError> {
        Self::new(&config.user_agent, Duration::from_millis(config.timeout_ms))
    }
}

fn classify(url: &str, err: reqwest::Error) -> ResolveError {
    if err.is_timeout() {
        ResolveError::Timeout {
            url: url.to_string(),
        }
    } else {
        ResolveError::Network(err)
    }
}

#[async_trait::async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String, ResolveError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();

        if !status.is_success() {
            warn!("Release page returned status {}: {}", status, url);
            return Err(ResolveError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| classify(url, e))?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
