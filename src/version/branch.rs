//! Fenix release branch names
//!
//! Release branches are named `releases_vN.0.0` (older branches used
//! `releases/vN.0.0`). Only the major component varies.

use std::sync::LazyLock;

use regex::Regex;

static RELEASE_BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^releases[_/]v(\d+)\.0\.0$").unwrap());

/// A release branch and the Fenix major version it ships
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBranch {
    pub name: String,
    pub major: u64,
}

impl ReleaseBranch {
    /// Parse a branch name, returning `None` for anything that is not a release branch
    pub fn parse(name: &str) -> Option<Self> {
        let captures = RELEASE_BRANCH_RE.captures(name)?;
        let major = captures[1].parse().ok()?;

        Some(Self {
            name: name.to_string(),
            major,
        })
    }
}

/// Pick the release branch with the highest major version.
///
/// Non-release branches are ignored. When two branches share a major
/// version (e.g. both separator styles exist), the first one listed wins.
pub fn latest_release_branch<I, S>(names: I) -> Option<ReleaseBranch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| ReleaseBranch::parse(name.as_ref()))
        .fold(None, |latest: Option<ReleaseBranch>, branch| match latest {
            Some(current) if current.major >= branch.major => Some(current),
            _ => Some(branch),
        })
}
