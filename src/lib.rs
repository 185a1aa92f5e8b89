//! Reports the major Android Components version used by the current Fenix Beta.
//!
//! # Modules
//!
//! - [`action`]: Discovery flow and the `run` entry point
//! - [`config`]: Command-line / environment configuration
//! - [`github`]: Repository access over the GitHub REST API
//! - [`output`]: Step output and workflow command formatting
//! - [`version`]: Version token extraction and release branch selection

pub mod action;
pub mod config;
pub mod github;
pub mod output;
pub mod version;
