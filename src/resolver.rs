//! Release resolution
//!
//! Fetches the release page, runs the configured extractor over it, parses
//! the advertised versions and picks the download URL of the highest one.

use std::sync::Arc;

use scraper::Html;
use semver::Version;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::extract::{Extraction, Extractor, Hit, build_extractor};
use crate::page::PageSource;
use crate::version::{Candidate, parse_triple, select_latest};

/// The selected release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: Version,
    pub url: String,
}

impl From<Candidate> for Resolution {
    fn from(candidate: Candidate) -> Self {
        Self {
            version: candidate.version,
            url: candidate.url,
        }
    }
}

pub struct ReleaseResolver {
    source: Arc<dyn PageSource>,
    extractor: Box<dyn Extractor>,
    config: ResolverConfig,
}

impl ReleaseResolver {
    /// Create a resolver using the extractor for the configured strategy
    pub fn new(
        source: Arc<dyn PageSource>,
        config: ResolverConfig,
    ) -> Result<Self, ResolveError> {
        let extractor = build_extractor(&config)?;
        Ok(Self {
            source,
            extractor,
            config,
        })
    }

    /// Fetch the release page and resolve the latest download URL
    pub async fn resolve(&self) -> Result<Resolution, ResolveError> {
        let page_url = Url::parse(&self.config.page_url)?;

        info!("Fetching release list from {}...", page_url);
        let body = self.source.fetch(page_url.as_str()).await?;

        self.resolve_document(&body, &page_url)
    }

    /// Resolve the latest download URL from an already fetched page
    pub fn resolve_document(
        &self,
        body: &str,
        page_url: &Url,
    ) -> Result<Resolution, ResolveError> {
        let document = Html::parse_document(body);
        let Extraction { matched, hits } = self.extractor.extract(&document, page_url);

        if matched == 0 {
            return Err(ResolveError::NoCandidates {
                url: page_url.to_string(),
            });
        }
        info!(
            "Found {} potential download links ({} strategy)...",
            matched,
            self.extractor.strategy()
        );

        let candidates: Vec<Candidate> = hits
            .into_iter()
            .filter_map(|hit| self.to_candidate(hit))
            .collect();

        let selected = select_latest(candidates).ok_or(ResolveError::NoValidVersion { matched })?;

        info!("Selected latest version: {}", selected.version);
        info!("Selected URL: {}", selected.url);

        Ok(selected.into())
    }

    fn to_candidate(&self, hit: Hit) -> Option<Candidate> {
        let version = match parse_triple(&hit.version_text) {
            Ok(version) => version,
            Err(e) => {
                warn!("Skipping candidate: {}", e);
                return None;
            }
        };

        let url = match hit.url {
            Some(url) => url,
            None => {
                let url = self.config.url_for_version(&version);
                debug!("Built URL {} from template for {}", url, version);
                url
            }
        };

        info!("  Found version {} with URL {}", version, url);
        Some(Candidate::new(version, url))
    }
}
