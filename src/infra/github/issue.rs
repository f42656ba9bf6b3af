//! Issue operations.

use serde::{Deserialize, Serialize};

use super::client::ReqwestClient;
use super::error::{GitHubError, Result};

/// Payload for `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The parts of GitHub's created-issue response the relay reports back.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
}

/// Trait for issue operations.
#[async_trait::async_trait]
pub trait IssueClient: Send + Sync {
    /// Create an issue in the configured repository.
    ///
    /// Makes exactly one request; failures are returned, never retried.
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue>;
}

#[async_trait::async_trait]
impl IssueClient for ReqwestClient {
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        let response = self
            .post(&format!("repos/{}/issues", self.repo()))
            .json(issue)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GitHubError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
