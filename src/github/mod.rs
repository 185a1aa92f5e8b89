//! Repository access over the GitHub REST API
//!
//! # Modules
//!
//! - [`client`]: reqwest-based [`RepositorySource`] implementation
//! - [`error`]: Error types for repository access
//! - [`source`]: Trait for reading branches and files from a repository

pub mod client;
pub mod error;
pub mod source;

pub use client::GitHubClient;
pub use error::SourceError;
pub use source::RepositorySource;
