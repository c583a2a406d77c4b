use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::extract::Strategy;

// =============================================================================
// Release page defaults
// =============================================================================

/// Release listing for the UniFi Network Server
pub const DEFAULT_PAGE_URL: &str = "https://ui.com/download/releases/network-server";

/// Anchor title, e.g. `Download v 9.1.120 (Linux)`
pub const ANCHOR_TITLE_PATTERN: &str = r"Download v (\d+\.\d+\.\d+) \(Linux\)";

/// Heading title, e.g. `v 9.1.120 (Linux)`
pub const HEADING_TITLE_PATTERN: &str = r"v (\d+\.\d+\.\d+) \(Linux\)";

pub const DEFAULT_HREF_PREFIX: &str = "https://dl.ui.com/unifi/";

/// Version embedded as a path segment of the download href
pub const DEFAULT_HREF_VERSION_PATTERN: &str = r"/(\d+\.\d+\.\d+)/";

pub const DEFAULT_FILENAME_SUFFIX: &str = "unifi_sysvinit_all.deb";

/// `{version}` is replaced with the selected version
pub const DEFAULT_URL_TEMPLATE: &str = "https://dl.ui.com/unifi/{version}/unifi_sysvinit_all.deb";

// =============================================================================
// Fetch constants
// =============================================================================

/// Timeout for the page fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// The release page serves a reduced document to unknown clients
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Resolver configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub page_url: String,
    pub strategy: Strategy,
    /// Overrides the strategy's built-in title pattern
    pub title_pattern: Option<String>,
    pub href_prefix: String,
    pub href_version_pattern: String,
    pub filename_suffix: String,
    pub url_template: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            strategy: Strategy::default(),
            title_pattern: None,
            href_prefix: DEFAULT_HREF_PREFIX.to_string(),
            href_version_pattern: DEFAULT_HREF_VERSION_PATTERN.to_string(),
            filename_suffix: DEFAULT_FILENAME_SUFFIX.to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Title pattern in effect for the configured strategy
    pub fn title_pattern(&self) -> &str {
        match &self.title_pattern {
            Some(pattern) => pattern,
            None => match self.strategy {
                Strategy::HeadingTitle => HEADING_TITLE_PATTERN,
                Strategy::AnchorTitle | Strategy::AnchorHref => ANCHOR_TITLE_PATTERN,
            },
        }
    }

    /// Download URL for a version that the page did not link directly
    pub fn url_for_version(&self, version: &semver::Version) -> String {
        self.url_template.replace("{version}", &version.to_string())
    }
}

/// Load configuration from a JSON file, missing fields take their defaults
pub fn load_config(path: &Path) -> Result<ResolverConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Load the explicitly named file, or the default file if it exists, or the defaults
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<ResolverConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = config_path();
    if default_path.is_file() {
        load_config(&default_path)
    } else {
        Ok(ResolverConfig::default())
    }
}

/// Returns the path to the config directory for release-resolver.
/// Uses $XDG_CONFIG_HOME/release-resolver if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/release-resolver,
/// or ./release-resolver if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("release-resolver")
}
