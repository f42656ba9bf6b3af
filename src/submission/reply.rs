//! Caller-facing responses.
//!
//! Messages here are the only text a caller ever sees. Upstream and internal
//! failure detail stays in the logs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const ISSUE_CREATION_FAILED: &str = "Failed to create issue";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const SUBMISSION_RECEIVED: &str = "Submission received";
pub const SUBMISSION_CREATED: &str = "Your AI initiative has been submitted successfully!";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Payload {
    Error {
        error: String,
    },
    #[serde(rename_all = "camelCase")]
    Success {
        success: bool,
        message: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        issue_number: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        issue_url: Option<String>,
    },
}

/// Status plus optional JSON body. `None` means an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub payload: Option<Payload>,
}

impl Reply {
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            payload: None,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: Some(Payload::Error {
                error: message.into(),
            }),
        }
    }

    /// Generic success with no issue details, used when a submission is
    /// dropped without telling the sender.
    pub fn received() -> Self {
        Self {
            status: StatusCode::OK,
            payload: Some(Payload::Success {
                success: true,
                message: SUBMISSION_RECEIVED,
                issue_number: None,
                issue_url: None,
            }),
        }
    }

    pub fn created(issue_number: u64, issue_url: String) -> Self {
        Self {
            status: StatusCode::OK,
            payload: Some(Payload::Success {
                success: true,
                message: SUBMISSION_CREATED,
                issue_number: Some(issue_number),
                issue_url: Some(issue_url),
            }),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.payload {
            Some(payload) => (self.status, Json(payload)).into_response(),
            None => self.status.into_response(),
        }
    }
}
