//! The submission endpoint: one inbound request, at most one GitHub call,
//! one JSON reply.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use tracing::{debug, error, info, instrument, warn};

use super::body::compose_issue;
use super::error::{Result, SubmissionError};
use super::model::Submission;
use super::reply::{self, Reply};
use crate::infra::github::IssueClient;

/// Stateless handler for registry form submissions.
///
/// Cloning is cheap; the only state is the shared GitHub client, which owns
/// the target repository and credential.
#[derive(Clone)]
pub struct SubmissionHandler {
    client: Arc<dyn IssueClient>,
}

impl SubmissionHandler {
    pub fn new(client: Arc<dyn IssueClient>) -> Self {
        Self { client }
    }

    /// Handle one request. Every path produces a reply; nothing is retried.
    #[instrument(name = "submission", skip_all, fields(method = %method, body_len = body.len()))]
    pub async fn handle(&self, method: &Method, body: &[u8]) -> Reply {
        if method == Method::OPTIONS {
            return Reply::preflight();
        }

        if method != Method::POST {
            warn!("Rejected non-POST request");
            return Reply::error(StatusCode::METHOD_NOT_ALLOWED, reply::METHOD_NOT_ALLOWED);
        }

        match self.submit(body).await {
            Ok(reply) => reply,
            Err(SubmissionError::Invalid(e)) => {
                info!(reason = %e, "Submission failed validation");
                Reply::error(StatusCode::BAD_REQUEST, e.to_string())
            }
            Err(SubmissionError::GitHub(e)) if e.is_rejected() => {
                error!(error = %e, "GitHub API error");
                Reply::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    reply::ISSUE_CREATION_FAILED,
                )
            }
            // Unparseable bodies land here too, indistinguishable from real faults.
            Err(e) => {
                error!(error = %e, "Submission handling failed");
                Reply::error(StatusCode::INTERNAL_SERVER_ERROR, reply::INTERNAL_ERROR)
            }
        }
    }

    async fn submit(&self, body: &[u8]) -> Result<Reply> {
        let submission = Submission::from_json(body)?;
        let entry = submission.validate_required()?;

        if submission.is_honeypot_filled() {
            info!("Honeypot field filled, dropping submission");
            return Ok(Reply::received());
        }

        entry.validate_contact()?;

        let issue = compose_issue(&entry);
        debug!(title = %issue.title, "Creating issue");
        let created = self.client.create_issue(&issue).await?;

        info!(
            issue_number = created.number,
            issue_url = %created.html_url,
            "Issue created"
        );
        Ok(Reply::created(created.number, created.html_url))
    }
}
