//! Fake GitHub API test utilities

use std::path::PathBuf;

use mockito::{Matcher, Mock, Server, ServerGuard};

use fenix_beta_ac_version::config::{
    ActionConfig, DEFAULT_MANIFEST_PATH, DEFAULT_REPOSITORY, DEFAULT_VERSION_FILE, LogFormat,
};

pub const OWNER: &str = "mozilla-mobile";

/// Kotlin manifest declaring the given Android Components version
pub fn manifest(version: &str) -> String {
    format!(
        "object AndroidComponents {{\n    const val VERSION = \"{}\"\n}}\n",
        version
    )
}

/// Fake GitHub API serving a single repository
pub struct FakeGitHub {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl FakeGitHub {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Serve a single page of branches
    pub async fn with_branches(mut self, names: &[&str]) -> Self {
        let body = serde_json::Value::Array(
            names
                .iter()
                .map(|name| serde_json::json!({ "name": name, "protected": false }))
                .collect(),
        );
        let mock = self
            .server
            .mock("GET", repo_path("branches").as_str())
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Serve a raw file at the given ref
    pub async fn with_file(mut self, git_ref: &str, path: &str, content: &str) -> Self {
        let mock = self
            .server
            .mock("GET", repo_path(&format!("contents/{}", path)).as_str())
            .match_query(Matcher::UrlEncoded("ref".into(), git_ref.into()))
            .with_status(200)
            .with_body(content)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Serve a Beta release branch with its version file and manifest
    pub async fn with_beta_release(self, branch: &str, fenix_version: &str, ac_version: &str) -> Self {
        self.with_file(branch, DEFAULT_VERSION_FILE, fenix_version)
            .await
            .with_file(branch, DEFAULT_MANIFEST_PATH, &manifest(ac_version))
            .await
    }

    /// Respond to `GET /user` with the given status
    pub async fn with_user(mut self, token: &str, status: usize) -> Self {
        let mock = self
            .server
            .mock("GET", "/user")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"login": "release-bot"}"#)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Configuration pointing at this server
    pub fn config(&self, token: Option<&str>, output_file: Option<PathBuf>) -> ActionConfig {
        test_config(&self.url(), token, output_file)
    }
}

pub fn test_config(api_url: &str, token: Option<&str>, output_file: Option<PathBuf>) -> ActionConfig {
    ActionConfig {
        owner: Some(OWNER.to_string()),
        repository: DEFAULT_REPOSITORY.to_string(),
        api_url: api_url.to_string(),
        token: token.map(str::to_string),
        manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
        version_file: DEFAULT_VERSION_FILE.to_string(),
        output_file,
        verbose: false,
        log_format: LogFormat::Text,
    }
}

fn repo_path(suffix: &str) -> String {
    format!("/repos/{}/{}/{}", OWNER, DEFAULT_REPOSITORY, suffix)
}
