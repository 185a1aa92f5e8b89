use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Parser, ValueEnum};

use crate::github::client::DEFAULT_BASE_URL;

// =============================================================================
// Repository layout
// =============================================================================

/// Repository the Beta is read from, under the configured owner
pub const DEFAULT_REPOSITORY: &str = "fenix";

/// Kotlin source declaring the Android Components version
pub const DEFAULT_MANIFEST_PATH: &str = "buildSrc/src/main/java/AndroidComponents.kt";

/// File holding the Fenix version of a release branch
pub const DEFAULT_VERSION_FILE: &str = "version.txt";

/// Name of the step output consumed by later workflow steps
pub const OUTPUT_NAME: &str = "major-ac-version";

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Action configuration, read from flags with the runner's environment as fallback
#[derive(Debug, Clone, Parser, PartialEq)]
#[command(name = "fenix-beta-ac-version")]
#[command(
    version,
    about = "Reports the major Android Components version used by the current Fenix Beta"
)]
pub struct ActionConfig {
    /// Organization or user owning the repository
    #[arg(long, env = "GITHUB_REPOSITORY_OWNER", value_parser = parse_raw::<String>)]
    pub owner: Option<String>,

    /// Repository to inspect
    #[arg(long, default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Token used to authenticate against the API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, value_parser = parse_raw::<String>)]
    pub token: Option<String>,

    /// Path of the Android Components manifest in the repository
    #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest_path: String,

    /// Path of the version file in the repository
    #[arg(long, default_value = DEFAULT_VERSION_FILE)]
    pub version_file: String,

    /// File step outputs are appended to; falls back to the legacy set-output command
    #[arg(long, env = "GITHUB_OUTPUT", value_parser = parse_raw::<PathBuf>)]
    pub output_file: Option<PathBuf>,

    /// Log progress at info level
    #[arg(short, long, env = "VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Format of log lines written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

// Runners export unset secrets and outputs as empty strings, so parsing never
// rejects them; `without_empty_values` turns them into absent values.
fn parse_raw<T: From<String>>(value: &str) -> Result<T, Infallible> {
    Ok(T::from(value.to_string()))
}

impl ActionConfig {
    /// Parse flags (and their environment fallbacks), treating empty values as unset
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::without_empty_values)
    }

    fn without_empty_values(mut self) -> Self {
        self.owner = self.owner.filter(|owner| !owner.trim().is_empty());
        self.token = self.token.filter(|token| !token.trim().is_empty());
        self.output_file = self
            .output_file
            .filter(|path| !path.as_os_str().is_empty());
        if self.api_url.trim().is_empty() {
            self.api_url = DEFAULT_BASE_URL.to_string();
        }
        self
    }

    /// Default tracing directive when `RUST_LOG` is not set
    pub fn default_log_directive(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}

/// Paths read from each release branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPaths {
    pub manifest_path: String,
    pub version_file: String,
}

impl Default for RepositoryPaths {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            version_file: DEFAULT_VERSION_FILE.to_string(),
        }
    }
}

impl From<&ActionConfig> for RepositoryPaths {
    fn from(config: &ActionConfig) -> Self {
        Self {
            manifest_path: config.manifest_path.clone(),
            version_file: config.version_file.clone(),
        }
    }
}
