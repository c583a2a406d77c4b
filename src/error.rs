use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: HTTP status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("No links matching the pattern found at {url}")]
    NoCandidates { url: String },

    #[error(
        "Could not determine the latest valid download URL from {matched} matched element(s)"
    )]
    NoValidVersion { matched: usize },
}

/// Error for a single version string; the candidate is skipped, the scan continues
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("'{0}' is not a major.minor.patch version")]
    Malformed(String),

    #[error("'{0}' carries pre-release or build metadata")]
    Qualified(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
