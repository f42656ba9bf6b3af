//! Centralized reader for the relay's environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const GITHUB_REPO: &str = "GITHUB_REPO";
const GITHUB_PAT: &str = "GITHUB_PAT";
const GITHUB_API_URL: &str = "GITHUB_API_URL";
const ALLOWED_ORIGIN: &str = "RELAY_ALLOWED_ORIGIN";
const BIND: &str = "RELAY_BIND";
const LOG_FORMAT: &str = "RELAY_LOG_FORMAT";

/// Snapshot of the relay's environment variables at load time.
///
/// Empty values are treated as unset.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// Target repository as `owner/repo`.
    pub github_repo: Option<String>,

    /// Token used to create issues. Never logged.
    pub github_pat: Option<String>,

    /// REST API base URL, for GitHub Enterprise or tests.
    pub github_api_url: Option<String>,

    /// Value for `Access-Control-Allow-Origin`.
    pub allowed_origin: Option<String>,

    /// Socket address to listen on.
    pub bind: Option<String>,

    /// "text" or "json".
    pub log_format: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all relay environment variables from the current process.
    pub fn load() -> Self {
        Self {
            github_repo: non_empty_var(GITHUB_REPO),
            github_pat: non_empty_var(GITHUB_PAT),
            github_api_url: non_empty_var(GITHUB_API_URL),
            allowed_origin: non_empty_var(ALLOWED_ORIGIN),
            bind: non_empty_var(BIND),
            log_format: non_empty_var(LOG_FORMAT),
        }
    }

    /// Returns the env var name for the repository (used in error messages).
    pub fn github_repo_name() -> &'static str {
        GITHUB_REPO
    }

    /// Returns the env var name for the token (used in error messages).
    pub fn github_pat_name() -> &'static str {
        GITHUB_PAT
    }

    /// Returns the env var name for the log format (used in error messages).
    pub fn log_format_name() -> &'static str {
        LOG_FORMAT
    }
}

impl std::fmt::Debug for EnvVars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvVars")
            .field("github_repo", &self.github_repo)
            .field("github_pat", &self.github_pat.as_ref().map(|_| "***"))
            .field("github_api_url", &self.github_api_url)
            .field("allowed_origin", &self.allowed_origin)
            .field("bind", &self.bind)
            .field("log_format", &self.log_format)
            .finish()
    }
}
