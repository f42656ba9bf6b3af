//! Process-wide relay configuration.
//!
//! Resolved once at startup from command-line flags (highest priority),
//! then environment variables, then built-in defaults. Nothing here changes
//! at runtime; the resolved values are handed to the handler explicitly.

use std::fmt;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use super::env_var::EnvVars;
use crate::infra::github::{ClientConfig, DEFAULT_API_URL, GitHubError, RepoSlug};

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing target repository: set {} or pass --repo", EnvVars::github_repo_name())]
    MissingRepo,

    #[error("Missing GitHub token: set {}", EnvVars::github_pat_name())]
    MissingToken,

    #[error(transparent)]
    InvalidRepo(#[from] GitHubError),

    #[error("Invalid GitHub API URL {value:?}: {reason}")]
    InvalidApiUrl { value: String, reason: String },

    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBind {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Invalid allowed origin {0:?}: not a valid header value")]
    InvalidOrigin(String),

    #[error("Invalid {var} value {value:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat { var: &'static str, value: String },
}

/// Flag values that take precedence over the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub repo: Option<&'a str>,
    pub api_url: Option<&'a str>,
    pub allowed_origin: Option<&'a str>,
    pub bind: Option<&'a str>,
}

#[derive(Clone)]
pub struct RelayConfig {
    pub bind: SocketAddr,
    /// `Access-Control-Allow-Origin` value. `*` unless locked down to the
    /// front-end's origin.
    pub allowed_origin: HeaderValue,
    pub github: ClientConfig,
}

impl RelayConfig {
    pub fn resolve(env: &EnvVars, overrides: Overrides<'_>) -> Result<Self, ConfigError> {
        let repo: RepoSlug = overrides
            .repo
            .or(env.github_repo.as_deref())
            .ok_or(ConfigError::MissingRepo)?
            .parse()?;

        let token = env
            .github_pat
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?
            .to_string();

        let api_url = overrides
            .api_url
            .or(env.github_api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL);
        reqwest::Url::parse(api_url).map_err(|e| ConfigError::InvalidApiUrl {
            value: api_url.to_string(),
            reason: e.to_string(),
        })?;

        let origin = overrides
            .allowed_origin
            .or(env.allowed_origin.as_deref())
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN);
        let allowed_origin = HeaderValue::from_str(origin)
            .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;

        let bind_value = overrides
            .bind
            .or(env.bind.as_deref())
            .unwrap_or(DEFAULT_BIND);
        let bind: SocketAddr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind_value.to_string(),
                source,
            })?;

        Ok(Self {
            bind,
            allowed_origin,
            github: ClientConfig {
                api_url: api_url.to_string(),
                repo,
                token,
            },
        })
    }

    /// Whether the CORS origin is still the wildcard default.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origin == DEFAULT_ALLOWED_ORIGIN
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("bind", &self.bind)
            .field("allowed_origin", &self.allowed_origin)
            .field("github", &self.github)
            .finish()
    }
}
