//! Heading title extractor
//!
//! Some revisions of the release page list each release as a heading,
//! `<h3 title="v 9.1.120 (Linux)">`, with the download button rendered by
//! script. The hits carry no URL; it is built from the URL template.

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::extract::capture_version;
use crate::extract::traits::Extractor;
use crate::extract::types::{Extraction, Hit, Strategy};

pub struct HeadingTitleExtractor {
    headings: Selector,
    title_re: Regex,
}

impl HeadingTitleExtractor {
    pub fn new(title_re: Regex) -> Self {
        Self {
            headings: Selector::parse(
                "h1[title], h2[title], h3[title], h4[title], h5[title], h6[title]",
            )
            .unwrap(),
            title_re,
        }
    }
}

impl Extractor for HeadingTitleExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::HeadingTitle
    }

    fn extract(&self, document: &Html, _page_url: &Url) -> Extraction {
        let hits: Vec<Hit> = document
            .select(&self.headings)
            .filter_map(|heading| heading.value().attr("title"))
            .filter_map(|title| capture_version(&self.title_re, title))
            .map(Hit::unlinked)
            .collect();

        Extraction {
            matched: hits.len(),
            hits,
        }
    }
}
