//! GitHub API client module using reqwest.
//!
//! Provides a trait-based abstraction for the single GitHub operation the
//! relay needs (issue creation), authenticated with a server-held token.

mod client;
pub(crate) mod error;
mod issue;
#[cfg(test)]
pub mod mock;
mod repo;

pub use client::{ClientConfig, DEFAULT_API_URL, ReqwestClient};
pub use error::GitHubError;
pub use issue::{IssueClient, NewIssue};
pub use repo::RepoSlug;

#[cfg(test)]
pub use mock::{GitHubMockServer, MockGitHubClient};
