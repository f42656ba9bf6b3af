//! Test doubles for the GitHub API.
//!
//! - `GitHubMockServer`: wiremock-based HTTP-level mock, for tests that need
//!   to verify the actual request sent over the wire.
//! - `MockGitHubClient`: in-process `IssueClient` that records every call,
//!   for handler tests that only care about what was (or was not) sent.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! let ctx = mock.repo("owner", "repo");
//!
//! ctx.issue(42).create().await;
//! ctx.issue(42).expect_payload(&issue).times(1).create().await;
//! ctx.issue(42).create_failing(422, r#"{"message":"Validation Failed"}"#).await;
//!
//! let client = mock.client("owner/repo");
//! ```

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use super::client::{ClientConfig, ReqwestClient, USER_AGENT};
use super::error::{GitHubError, Result};
use super::issue::{CreatedIssue, IssueClient, NewIssue};

pub const TEST_TOKEN: &str = "test-token";

/// Create a mock issue JSON object shaped like GitHub's REST response.
fn mock_issue(owner: &str, repo: &str, issue_number: u64) -> serde_json::Value {
    json!({
        "id": 1,
        "node_id": "I_test",
        "url": format!("https://api.github.com/repos/{}/{}/issues/{}", owner, repo, issue_number),
        "repository_url": format!("https://api.github.com/repos/{}/{}", owner, repo),
        "html_url": format!("https://github.com/{}/{}/issues/{}", owner, repo, issue_number),
        "number": issue_number,
        "state": "open",
        "title": "Test Issue",
        "body": "Test body",
        "user": {"login": "relay-bot", "id": 1, "type": "Bot"},
        "labels": [{"id": 1, "name": "ai-initiative", "color": "0e8a16", "default": false}],
        "assignees": [],
        "locked": false,
        "comments": 0,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

/// wiremock-based GitHub mock server for testing.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to point a `ReqwestClient` at.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get a ReqwestClient configured to use this mock server.
    pub fn client(&self, repo: &str) -> ReqwestClient {
        ReqwestClient::new(&ClientConfig {
            api_url: self.uri(),
            repo: repo.parse().unwrap(),
            token: TEST_TOKEN.to_string(),
        })
        .unwrap()
    }

    /// Create a repository context for building mocks.
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }
}

// ============ Builder Pattern API ============

/// Repository context for building mocks.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl MockRepoContext<'_> {
    /// Create an issue mock builder.
    pub fn issue(&self, number: u64) -> MockIssueBuilder<'_> {
        MockIssueBuilder {
            server: self.server,
            owner: self.owner,
            repo: self.repo,
            number,
            payload: None,
            times: None,
        }
    }
}

/// Builder for `POST /repos/{owner}/{repo}/issues` mocks.
///
/// Every variant only matches requests carrying the headers the relay must
/// send, so a missing header surfaces as an unmatched request (404).
pub struct MockIssueBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
    number: u64,
    payload: Option<serde_json::Value>,
    times: Option<u64>,
}

impl MockIssueBuilder<'_> {
    /// Only match requests whose JSON body equals `issue`.
    pub fn expect_payload(mut self, issue: &NewIssue) -> Self {
        self.payload = Some(serde_json::to_value(issue).unwrap());
        self
    }

    /// Verify on drop that exactly `n` matching requests arrived.
    pub fn times(mut self, n: u64) -> Self {
        self.times = Some(n);
        self
    }

    fn given(&self) -> MockBuilder {
        let builder = Mock::given(method("POST"))
            .and(path(format!("/repos/{}/{}/issues", self.owner, self.repo)))
            .and(header("accept", "application/vnd.github+json"))
            .and(header("user-agent", USER_AGENT))
            .and(header("content-type", "application/json"))
            .and(bearer_token(TEST_TOKEN));
        match &self.payload {
            Some(payload) => builder.and(body_json(payload)),
            None => builder,
        }
    }

    async fn mount(self, response: ResponseTemplate) {
        let mock = self.given().respond_with(response);
        let mock = match self.times {
            Some(n) => mock.expect(n),
            None => mock,
        };
        mock.mount(self.server).await;
    }

    /// Respond 201 with a created issue.
    pub async fn create(self) {
        let issue = mock_issue(self.owner, self.repo, self.number);
        self.mount(ResponseTemplate::new(201).set_body_json(issue)).await;
    }

    /// Respond with a failure status and a raw body.
    pub async fn create_failing(self, status: u16, body: &str) {
        self.mount(ResponseTemplate::new(status).set_body_string(body)).await;
    }

    /// Respond 201 with an arbitrary JSON body.
    pub async fn create_with_body(self, body: serde_json::Value) {
        self.mount(ResponseTemplate::new(201).set_body_json(body)).await;
    }
}

// ============ In-process client ============

/// What `MockGitHubClient::create_issue` answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Created(CreatedIssue),
    Rejected { status: u16, body: String },
    /// A success response whose body is not a created issue.
    Malformed,
}

/// Mock implementation for testing.
#[derive(Clone)]
pub struct MockGitHubClient {
    pub outcome: MockOutcome,
    /// Track created issues for assertions
    pub created_issues: Arc<Mutex<Vec<NewIssue>>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self {
            outcome: MockOutcome::Created(CreatedIssue {
                number: 1,
                html_url: "https://github.com/owner/repo/issues/1".to_string(),
            }),
            created_issues: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_created(mut self, number: u64, html_url: &str) -> Self {
        self.outcome = MockOutcome::Created(CreatedIssue {
            number,
            html_url: html_url.to_string(),
        });
        self
    }

    pub fn with_rejection(mut self, status: u16, body: &str) -> Self {
        self.outcome = MockOutcome::Rejected {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn with_malformed_response(mut self) -> Self {
        self.outcome = MockOutcome::Malformed;
        self
    }

    pub fn created_issues(&self) -> Vec<NewIssue> {
        self.created_issues.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IssueClient for MockGitHubClient {
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        self.created_issues.lock().unwrap().push(issue.clone());

        match &self.outcome {
            MockOutcome::Created(created) => Ok(created.clone()),
            MockOutcome::Rejected { status, body } => Err(GitHubError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            MockOutcome::Malformed => Err(serde_json::from_str::<CreatedIssue>(r#"{"ok":true}"#)
                .unwrap_err()
                .into()),
        }
    }
}
