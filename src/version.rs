//! Version parsing and latest-candidate selection

use semver::Version;

use crate::error::VersionParseError;

/// A release advertised on the page, with its download URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub version: Version,
    pub url: String,
}

impl Candidate {
    pub fn new(version: Version, url: impl Into<String>) -> Self {
        Self {
            version,
            url: url.into(),
        }
    }
}

/// Parse a strict `major.minor.patch` triple.
///
/// Components are plain decimal numbers, so leading zeros are accepted
/// ("9.01.2" is 9.1.2). Partial versions ("9.1") and versions with
/// pre-release or build metadata ("9.1.0-rc1") are rejected.
pub fn parse_triple(text: &str) -> Result<Version, VersionParseError> {
    let text = text.trim();
    let malformed = || VersionParseError::Malformed(text.to_string());

    let (core, qualified) = match text.find(['-', '+']) {
        Some(idx) => (&text[..idx], true),
        None => (text, false),
    };

    let parts = core
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u64>().map_err(|_| malformed())
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let [major, minor, patch] = parts[..] else {
        return Err(malformed());
    };

    if qualified {
        return Err(VersionParseError::Qualified(text.to_string()));
    }

    Ok(Version::new(major, minor, patch))
}

/// Pick the candidate with the highest version.
///
/// Left-to-right fold that only replaces the current best on a strictly
/// greater version, so among equal versions the first one seen wins.
pub fn select_latest<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().reduce(|best, candidate| {
        if candidate.version > best.version {
            candidate
        } else {
            best
        }
    })
}
