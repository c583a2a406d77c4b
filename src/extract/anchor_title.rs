//! Anchor title extractor
//!
//! Matches download anchors by their `title` attribute:
//!
//! ```html
//! <a title="Download v 9.1.120 (Linux)"
//!    href="https://dl.ui.com/unifi/9.1.120/unifi_sysvinit_all.deb">
//! ```
//!
//! The version comes from the title; the anchor's href is the download URL
//! and must end with the configured filename suffix.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::extract::traits::Extractor;
use crate::extract::types::{Extraction, Hit, Strategy};
use crate::extract::{capture_version, resolve_href};

pub struct AnchorTitleExtractor {
    anchors: Selector,
    title_re: Regex,
    filename_suffix: String,
}

impl AnchorTitleExtractor {
    pub fn new(title_re: Regex, filename_suffix: &str) -> Self {
        Self {
            anchors: Selector::parse("a[title]").unwrap(),
            title_re,
            filename_suffix: filename_suffix.to_string(),
        }
    }
}

impl Extractor for AnchorTitleExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::AnchorTitle
    }

    fn extract(&self, document: &Html, page_url: &Url) -> Extraction {
        let mut extraction = Extraction::default();

        for anchor in document.select(&self.anchors) {
            let Some(title) = anchor.value().attr("title") else {
                continue;
            };
            let Some(version_text) = capture_version(&self.title_re, title) else {
                continue;
            };
            extraction.matched += 1;

            let Some(href) = anchor.value().attr("href") else {
                debug!("Skipping '{}': anchor has no href", title);
                continue;
            };
            let Some(url) = resolve_href(page_url, href) else {
                debug!("Skipping '{}': unresolvable href {}", title, href);
                continue;
            };
            if !url.ends_with(&self.filename_suffix) {
                debug!(
                    "Skipping '{}': {} does not end with {}",
                    title, url, self.filename_suffix
                );
                continue;
            }

            extraction.hits.push(Hit::linked(version_text, url));
        }

        extraction
    }
}
