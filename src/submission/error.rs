//! Submission error types.

use thiserror::Error;

use crate::infra::github::GitHubError;

/// A submission the caller can fix. The message is returned verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Why a POSTed submission did not produce an issue.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Failed to parse submission: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, SubmissionError>;
