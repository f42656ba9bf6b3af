//! Repository identifiers.

use std::fmt;
use std::str::FromStr;

use super::error::GitHubError;

/// An `owner/repo` pair naming the repository issues are filed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = GitHubError;

    fn from_str(repo: &str) -> Result<Self, Self::Err> {
        repo.trim()
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'))
            .map(|(owner, name)| Self {
                owner: owner.to_string(),
                name: name.to_string(),
            })
            .ok_or_else(|| GitHubError::InvalidRepo(repo.to_string()))
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
