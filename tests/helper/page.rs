//! Page source test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use release_resolver::config::ResolverConfig;
use release_resolver::error::ResolveError;
use release_resolver::extract::Strategy;
use release_resolver::page::PageSource;

pub const TEST_PAGE_URL: &str = "https://ui.com/download/releases/network-server";

/// Page source serving fixed bodies
pub struct StaticPageSource {
    pages: HashMap<String, String>,
}

impl StaticPageSource {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch(&self, url: &str) -> Result<String, ResolveError> {
        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(ResolveError::HttpStatus {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// Default config pointed at `page_url` with the given strategy
pub fn test_config(page_url: &str, strategy: Strategy) -> ResolverConfig {
    ResolverConfig {
        page_url: page_url.to_string(),
        strategy,
        ..ResolverConfig::default()
    }
}
