//! Discovery of the Android Components version used by the current Fenix Beta
//!
//! The flow is:
//! 1. Find the latest release branch (highest `releases_vN.0.0`)
//! 2. Check `version.txt` on that branch to make sure it is in Beta
//! 3. Read the `VERSION` constant from the manifest on that branch
//! 4. Report its major version as the `major-ac-version` output

use anyhow::Context;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::{ActionConfig, OUTPUT_NAME, RepositoryPaths};
use crate::github::{GitHubClient, RepositorySource, SourceError};
use crate::output;
use crate::version::{self, ReleaseBranch, VersionError};

/// Broad category of a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The repository, branch, file, or token could not be located
    NotFound,
    /// A version token was present but not in the expected format
    Malformed,
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("No release branches found")]
    NoReleaseBranch,

    #[error("Branch {branch} is not in beta (version.txt reads {version:?})")]
    NotBeta { branch: String, version: String },

    #[error("{path} on {branch}: {source}")]
    Version {
        path: String,
        branch: String,
        #[source]
        source: VersionError,
    },
}

impl ActionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ActionError::Source(_)
            | ActionError::NoReleaseBranch
            | ActionError::Version {
                source: VersionError::TokenNotFound,
                ..
            } => FailureKind::NotFound,
            ActionError::NotBeta { .. }
            | ActionError::Version {
                source: VersionError::InvalidFormat(_),
                ..
            } => FailureKind::Malformed,
        }
    }
}

/// Result of a successful discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Latest release branch, which is in Beta
    pub release_branch: ReleaseBranch,
    /// Full Android Components version declared on that branch
    pub ac_version: String,
    /// Leading numeric component of `ac_version`
    pub major_ac_version: u64,
}

/// Find the major Android Components version used by the latest Beta branch
pub async fn discover_major_ac_version<S>(
    source: &S,
    paths: &RepositoryPaths,
) -> Result<Discovery, ActionError>
where
    S: RepositorySource + ?Sized,
{
    let branches = source.list_branches().await?;
    let release_branch =
        version::latest_release_branch(&branches).ok_or(ActionError::NoReleaseBranch)?;
    info!(
        "Latest Fenix version is {} (branch {})",
        release_branch.major, release_branch.name
    );

    let fenix_version = source
        .file_contents(&paths.version_file, &release_branch.name)
        .await?;
    if !version::is_beta_version(&fenix_version) {
        return Err(ActionError::NotBeta {
            branch: release_branch.name,
            version: fenix_version.trim().to_string(),
        });
    }
    info!("Branch {} is in beta", release_branch.name);

    let manifest = source
        .file_contents(&paths.manifest_path, &release_branch.name)
        .await?;
    let version_error = |source| ActionError::Version {
        path: paths.manifest_path.clone(),
        branch: release_branch.name.clone(),
        source,
    };
    let ac_version = version::extract_ac_version(&manifest).map_err(version_error)?;
    info!("Current A-C version used in Fenix is {}", ac_version);

    let major_ac_version = version::major_version(&ac_version).map_err(version_error)?;
    info!("Major A-C version is {}", major_ac_version);

    Ok(Discovery {
        release_branch,
        ac_version,
        major_ac_version,
    })
}

/// Run the action end to end and publish the `major-ac-version` output
pub async fn run(config: &ActionConfig) -> anyhow::Result<Discovery> {
    let owner = config
        .owner
        .as_deref()
        .context("No GITHUB_REPOSITORY_OWNER set")?;
    let client = GitHubClient::new(
        &config.api_url,
        owner,
        &config.repository,
        config.token.clone(),
    )
    .context("Failed to create GitHub client")?;

    if config.token.is_some() {
        let login = client
            .authenticated_user()
            .await
            .context("Could not get authenticated user")?;
        info!("Authenticated as {}", login);
    } else {
        warn!("No GitHub token configured, using unauthenticated requests");
    }

    let discovery = discover_major_ac_version(&client, &RepositoryPaths::from(config))
        .await
        .inspect_err(|e| error!("Discovery failed ({:?}): {}", e.kind(), e))
        .with_context(|| {
            format!(
                "Could not determine current A-C version on {}",
                client.full_name()
            )
        })?;

    output::emit(
        config.output_file.as_deref(),
        OUTPUT_NAME,
        &discovery.major_ac_version.to_string(),
    )
    .context("Failed to write step output")?;

    Ok(discovery)
}
