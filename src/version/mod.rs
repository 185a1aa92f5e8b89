//! Version parsing for Android Components and Fenix release branches
//!
//! # Modules
//!
//! - [`ac`]: `VERSION` token extraction, Beta detection, major version parsing
//! - [`branch`]: Release branch name parsing and selection
//! - [`error`]: Error types for version parsing

pub mod ac;
pub mod branch;
pub mod error;

pub use ac::{extract_ac_version, is_beta_version, major_version};
pub use branch::{ReleaseBranch, latest_release_branch};
pub use error::VersionError;
