//! Common types for extractors

use serde::Deserialize;

/// Which page elements carry the release versions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// `<a title="Download v 9.1.120 (Linux)" href="...">`
    #[default]
    AnchorTitle,
    /// `<a href="https://dl.ui.com/unifi/9.1.120/unifi_sysvinit_all.deb">`
    AnchorHref,
    /// `<h3 title="v 9.1.120 (Linux)">`, download URL built from a template
    HeadingTitle,
}

impl Strategy {
    /// Returns the string representation of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::AnchorTitle => "anchor-title",
            Strategy::AnchorHref => "anchor-href",
            Strategy::HeadingTitle => "heading-title",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element that passed the strategy's filters; its version is not parsed yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub version_text: String,
    /// Absolute download URL, `None` when the element carries no link
    pub url: Option<String>,
}

impl Hit {
    pub fn linked(version_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            version_text: version_text.into(),
            url: Some(url.into()),
        }
    }

    pub fn unlinked(version_text: impl Into<String>) -> Self {
        Self {
            version_text: version_text.into(),
            url: None,
        }
    }
}

/// Result of scanning one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Elements that matched the strategy's primary pattern
    pub matched: usize,
    pub hits: Vec<Hit>,
}
