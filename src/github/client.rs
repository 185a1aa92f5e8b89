//! GitHub REST API client

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::github::error::SourceError;
use crate::github::source::RepositorySource;

/// Default base URL for GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Page size used when listing branches (the API maximum)
const BRANCHES_PER_PAGE: usize = 100;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Response item from the branches API
#[derive(Debug, Deserialize)]
struct Branch {
    name: String,
}

/// Response from the authenticated user API
#[derive(Debug, Deserialize)]
struct User {
    login: String,
}

/// [`RepositorySource`] backed by the GitHub REST API
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repository: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a client for `owner/repository` against the given API base URL
    pub fn new(
        base_url: &str,
        owner: &str,
        repository: &str,
        token: Option<String>,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repository: repository.to_string(),
            token,
        })
    }

    /// Full name of the repository (e.g., "mozilla-mobile/fenix")
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }

    fn get(&self, url: &str, accept: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("Accept", accept)
            .header("X-GitHub-Api-Version", "2022-11-28");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        resource: &str,
    ) -> Result<reqwest::Response, SourceError> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(resource.to_string()));
        }

        let quota_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v.as_bytes() == b"0");

        // GitHub reports an exhausted primary rate limit as 403, not 429
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && quota_exhausted)
        {
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after_secs(response.headers()),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SourceError::Unauthorized(format!(
                "{} returned {}",
                resource, status
            )));
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, resource);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response)
    }
}

/// Seconds to wait before retrying, from `retry-after` or the `x-ratelimit-reset` epoch
fn retry_after_secs(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    let header = |name: &str| -> Option<u64> { headers.get(name)?.to_str().ok()?.parse().ok() };

    header("retry-after").or_else(|| {
        let reset = header("x-ratelimit-reset")?;
        let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
        Some(reset.saturating_sub(now))
    })
}

#[async_trait::async_trait]
impl RepositorySource for GitHubClient {
    async fn authenticated_user(&self) -> Result<String, SourceError> {
        let url = format!("{}/user", self.base_url);
        let response = self
            .send(self.get(&url, "application/vnd.github+json"), "user")
            .await?;

        let user: User = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub user response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        Ok(user.login)
    }

    async fn list_branches(&self) -> Result<Vec<String>, SourceError> {
        let full_name = self.full_name();
        let mut names = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}/repos/{}/branches?per_page={}&page={}",
                self.base_url, full_name, BRANCHES_PER_PAGE, page
            );
            debug!("Fetching branches page {} of {}", page, full_name);

            let response = self
                .send(self.get(&url, "application/vnd.github+json"), &full_name)
                .await?;

            let branches: Vec<Branch> = response.json().await.map_err(|e| {
                warn!("Failed to parse GitHub branches response: {}", e);
                SourceError::InvalidResponse(e.to_string())
            })?;

            let count = branches.len();
            names.extend(branches.into_iter().map(|b| b.name));

            if count < BRANCHES_PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!("Found {} branches in {}", names.len(), full_name);
        Ok(names)
    }

    async fn file_contents(&self, path: &str, git_ref: &str) -> Result<String, SourceError> {
        let url = format!(
            "{}/repos/{}/contents/{}?ref={}",
            self.base_url,
            self.full_name(),
            path.trim_start_matches('/'),
            git_ref
        );
        let resource = format!("{}:{}/{}", self.full_name(), git_ref, path);
        debug!("Fetching {}", resource);

        let response = self
            .send(self.get(&url, "application/vnd.github.raw"), &resource)
            .await?;

        Ok(response.text().await?)
    }
}
