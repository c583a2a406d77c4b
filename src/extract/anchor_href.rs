//! Anchor href extractor
//!
//! Matches download anchors by the shape of their href: it must start with
//! the download host prefix and end with the package filename. The version is
//! taken from the anchor's title when it has one, otherwise from the path.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::extract::traits::Extractor;
use crate::extract::types::{Extraction, Hit, Strategy};
use crate::extract::{capture_version, resolve_href};

pub struct AnchorHrefExtractor {
    anchors: Selector,
    title_re: Regex,
    href_version_re: Regex,
    href_prefix: String,
    filename_suffix: String,
}

impl AnchorHrefExtractor {
    pub fn new(
        title_re: Regex,
        href_version_re: Regex,
        href_prefix: &str,
        filename_suffix: &str,
    ) -> Self {
        Self {
            anchors: Selector::parse("a[href]").unwrap(),
            title_re,
            href_version_re,
            href_prefix: href_prefix.to_string(),
            filename_suffix: filename_suffix.to_string(),
        }
    }

    fn is_download_link(&self, url: &str) -> bool {
        url.starts_with(&self.href_prefix) && url.ends_with(&self.filename_suffix)
    }
}

impl Extractor for AnchorHrefExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::AnchorHref
    }

    fn extract(&self, document: &Html, page_url: &Url) -> Extraction {
        let mut extraction = Extraction::default();

        for anchor in document.select(&self.anchors) {
            let Some(url) = anchor
                .value()
                .attr("href")
                .and_then(|href| resolve_href(page_url, href))
            else {
                continue;
            };
            if !self.is_download_link(&url) {
                continue;
            }
            extraction.matched += 1;

            let from_title = anchor
                .value()
                .attr("title")
                .and_then(|title| capture_version(&self.title_re, title));

            let version_text = match from_title {
                Some(version) => version,
                None => match capture_version(&self.href_version_re, &url) {
                    Some(version) => {
                        debug!("Version {} taken from href {}", version, url);
                        version
                    }
                    None => {
                        warn!("No version found in title or href of {}", url);
                        continue;
                    }
                },
            };

            extraction.hits.push(Hit::linked(version_text, url));
        }

        extraction
    }
}
