//! Contains definitions of common types (repository name, comment and review identifiers,
//! reactions) needed for reacting to GitHub events.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

pub mod api;
pub mod event;
mod reaction;

pub use reaction::{ReactionKind, UnknownReaction};

/// Unique identifier of a GitHub repository
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GithubRepoName {
    owner: String,
    name: String,
}

impl GithubRepoName {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for GithubRepoName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.owner, self.name))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepoNameError {
    #[error("Repository `{0}` is not in the `owner/name` format")]
    InvalidFormat(String),
    #[error("Repository `{0}` has an empty owner")]
    EmptyOwner(String),
    #[error("Repository `{0}` has an empty name")]
    EmptyName(String),
}

/// Parses the `owner/name` form used by `GITHUB_REPOSITORY`.
impl FromStr for GithubRepoName {
    type Err = RepoNameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((owner, name)) = value.split_once('/') else {
            return Err(RepoNameError::InvalidFormat(value.to_string()));
        };
        if name.contains('/') {
            return Err(RepoNameError::InvalidFormat(value.to_string()));
        }
        if owner.trim().is_empty() {
            return Err(RepoNameError::EmptyOwner(value.to_string()));
        }
        if name.trim().is_empty() {
            return Err(RepoNameError::EmptyName(value.to_string()));
        }
        Ok(Self::new(owner.trim(), name.trim()))
    }
}

/// Identifier of an issue comment or of a pull request review comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl From<u64> for CommentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for CommentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <u64 as Display>::fmt(&self.0, f)
    }
}

/// Identifier of a pull request review (the review itself, not a comment on it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub u64);

impl From<u64> for ReviewId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <u64 as Display>::fmt(&self.0, f)
    }
}
