//! Android Components version handling
//!
//! The manifest declares the release in use as a Kotlin constant:
//!
//! ```text
//! object AndroidComponents {
//!     const val VERSION = "109.0b1"
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;

static VERSION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"VERSION = "([^"]*)""#).unwrap());

static BETA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.0b\d+").unwrap());

/// Extract the major version from a version string.
///
/// The major version is the leading run of ASCII digits. Anything after it
/// (dots, pre-release suffixes, timestamps) is ignored.
///
/// Examples:
/// - "50.0.1" -> 50
/// - "1.2.3-beta" -> 1
/// - "50.0.20210101120000" -> 50
/// - "109.0b1" -> 109
pub fn major_version(version: &str) -> Result<u64, VersionError> {
    let trimmed = version.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse()
        .map_err(|_| VersionError::InvalidFormat(version.to_string()))
}

/// Find the `VERSION = "..."` declaration in the manifest source.
///
/// The token must carry a parseable major version; anything else is reported
/// as an invalid format rather than silently passed downstream.
pub fn extract_ac_version(source: &str) -> Result<String, VersionError> {
    let captures = VERSION_TOKEN_RE
        .captures(source)
        .ok_or(VersionError::TokenNotFound)?;
    let version = captures[1].to_string();

    major_version(&version)?;
    Ok(version)
}

/// Whether the content of `version.txt` describes a Beta release (`N.0bM`).
pub fn is_beta_version(version: &str) -> bool {
    BETA_RE.is_match(version.trim())
}
