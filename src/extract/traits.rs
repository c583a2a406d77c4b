//! Extractor trait definition

use scraper::Html;
use url::Url;

use crate::extract::types::{Extraction, Strategy};

/// Trait for pulling release candidates out of a parsed page
pub trait Extractor: Send + Sync {
    /// Returns the strategy this extractor implements
    fn strategy(&self) -> Strategy;

    /// Scan the document in order; relative hrefs are resolved against `page_url`
    fn extract(&self, document: &Html, page_url: &Url) -> Extraction;
}
