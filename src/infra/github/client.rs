//! GitHub REST client implementation using reqwest.

use std::fmt;

use reqwest::RequestBuilder;
use reqwest::header::ACCEPT;

use super::error::{GitHubError, Result};
use super::repo::RepoSlug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const USER_AGENT: &str = "AI-Initiative-Registry-Worker";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Settings the client is built from. Supplied once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without trailing slash.
    pub api_url: String,
    /// Repository new issues are filed in.
    pub repo: RepoSlug,
    /// Token sent as `Authorization: Bearer`.
    pub token: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .field("token", &"***")
            .finish()
    }
}

/// Production implementation using reqwest.
///
/// Holds a single connection pool; no timeout is configured beyond
/// reqwest's defaults, and nothing is retried.
pub struct ReqwestClient {
    http: reqwest::Client,
    api_url: String,
    repo: RepoSlug,
    token: String,
}

impl ReqwestClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GitHubError::ClientBuild)?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repo: config.repo.clone(),
            token: config.token.clone(),
        })
    }

    pub fn repo(&self) -> &RepoSlug {
        &self.repo
    }

    /// Start an authenticated POST to `{api_url}/{path}`.
    pub(super) fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}/{}", self.api_url, path.trim_start_matches('/')))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .bearer_auth(&self.token)
    }
}
