//! GitHub API error types.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Invalid repository format: {0}. Expected owner/repo")]
    InvalidRepo(String),

    #[error("Failed to build GitHub client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{}", format_rejection(.status, .body))]
    Rejected { status: u16, body: String },

    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Whether GitHub answered with a non-success status, as opposed to the
    /// request never completing or the answer being unreadable.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Error payload GitHub returns alongside 4xx/5xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

/// Format a rejected response, extracting GitHub's `message` and `errors`
/// when the body is the usual JSON error payload.
fn format_rejection(status: &u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!(
            "GitHub API error: {} (HTTP {status}){}",
            parsed.message,
            format_error_details(&parsed.errors)
        ),
        Err(_) if body.trim().is_empty() => format!("GitHub API error (HTTP {status})"),
        Err(_) => format!("GitHub API error (HTTP {status}): {}", body.trim()),
    }
}

/// Format error details from GitHub API errors array.
/// Returns a formatted string like "[field1 is code1, field2 is code2]" or empty string.
fn format_error_details(errors: &[serde_json::Value]) -> String {
    let error_details: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(f), None) => Some(f.to_string()),
                (None, Some(c)) => Some(c.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if error_details.is_empty() {
        String::new()
    } else {
        format!(" [{}]", error_details.join(", "))
    }
}
