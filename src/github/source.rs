//! Trait for reading a repository's branches and files

#[cfg(test)]
use mockall::automock;

use crate::github::error::SourceError;

/// Read-only view of a single repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositorySource: Send + Sync {
    /// Returns the login of the user the configured credentials belong to
    async fn authenticated_user(&self) -> Result<String, SourceError>;

    /// Lists the names of all branches, following pagination
    async fn list_branches(&self) -> Result<Vec<String>, SourceError>;

    /// Fetches the decoded contents of a file
    ///
    /// # Arguments
    /// * `path` - Path relative to the repository root (e.g., "version.txt")
    /// * `git_ref` - Branch, tag, or commit to read from
    async fn file_contents(&self, path: &str, git_ref: &str) -> Result<String, SourceError>;
}
