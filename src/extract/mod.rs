//! Candidate extraction layer
//! - traits.rs: Extractor trait definition
//! - types.rs: Common types (Strategy, Hit, Extraction)
//! - anchor_title.rs: anchors matched by title attribute
//! - anchor_href.rs: anchors matched by href shape
//! - heading_title.rs: headings matched by title attribute

pub mod anchor_href;
pub mod anchor_title;
pub mod heading_title;
pub mod traits;
pub mod types;

pub use anchor_href::AnchorHrefExtractor;
pub use anchor_title::AnchorTitleExtractor;
pub use heading_title::HeadingTitleExtractor;
pub use traits::Extractor;
pub use types::{Extraction, Hit, Strategy};

use regex::Regex;
use url::Url;

use crate::config::ResolverConfig;
use crate::error::ResolveError;

/// Build the extractor for the configured strategy
pub fn build_extractor(config: &ResolverConfig) -> Result<Box<dyn Extractor>, ResolveError> {
    let title_re = Regex::new(config.title_pattern())?;

    let extractor: Box<dyn Extractor> = match config.strategy {
        Strategy::AnchorTitle => Box::new(AnchorTitleExtractor::new(
            title_re,
            &config.filename_suffix,
        )),
        Strategy::AnchorHref => Box::new(AnchorHrefExtractor::new(
            title_re,
            Regex::new(&config.href_version_pattern)?,
            &config.href_prefix,
            &config.filename_suffix,
        )),
        Strategy::HeadingTitle => Box::new(HeadingTitleExtractor::new(title_re)),
    };

    Ok(extractor)
}

/// First capture group of `re` in `text`, or the whole match for patterns without groups
pub(crate) fn capture_version(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(0))
        .map(|m| m.as_str().to_string())
}

/// Absolute form of `href`, relative links are joined onto the page URL
pub(crate) fn resolve_href(page_url: &Url, href: &str) -> Option<String> {
    page_url.join(href.trim()).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Strategy::AnchorTitle)]
    #[case(Strategy::AnchorHref)]
    #[case(Strategy::HeadingTitle)]
    fn build_extractor_returns_extractor_for_strategy(#[case] strategy: Strategy) {
        let config = ResolverConfig {
            strategy,
            ..ResolverConfig::default()
        };

        let extractor = build_extractor(&config).unwrap();
        assert_eq!(extractor.strategy(), strategy);
    }

    #[test]
    fn build_extractor_rejects_invalid_title_pattern() {
        let config = ResolverConfig {
            title_pattern: Some("v (\\d+".to_string()),
            ..ResolverConfig::default()
        };

        assert!(matches!(
            build_extractor(&config),
            Err(ResolveError::InvalidPattern(_))
        ));
    }

    #[rstest]
    #[case(r"v (\d+\.\d+\.\d+)", "Download v 9.1.2 (Linux)", Some("9.1.2"))]
    #[case(r"\d+\.\d+\.\d+", "Download v 9.1.2 (Linux)", Some("9.1.2"))]
    #[case(r"v (\d+\.\d+\.\d+)", "Download 9.1.2", None)]
    fn capture_version_returns_expected(
        #[case] pattern: &str,
        #[case] text: &str,
        #[case] expected: Option<&str>,
    ) {
        let re = Regex::new(pattern).unwrap();
        assert_eq!(capture_version(&re, text), expected.map(|s| s.to_string()));
    }

    #[rstest]
    #[case("https://dl.ui.com/a.deb", "https://dl.ui.com/a.deb")]
    #[case("/a.deb", "https://ui.com/a.deb")]
    #[case("a.deb", "https://ui.com/download/releases/a.deb")]
    fn resolve_href_returns_absolute_url(#[case] href: &str, #[case] expected: &str) {
        let page_url = Url::parse("https://ui.com/download/releases/network-server").unwrap();
        assert_eq!(resolve_href(&page_url, href), Some(expected.to_string()));
    }
}
