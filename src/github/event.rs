use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::github::{CommentId, GithubRepoName, ReviewId};

/// A GitHub event that triggered the automation run, decoded from its webhook payload.
/// Only the fields needed to find a reaction target are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum GithubEvent {
    /// A comment was posted on an issue or on a pull request conversation.
    IssueComment { comment: Option<CommentId> },
    /// A comment was posted on a line of a pull request diff.
    PullRequestReviewComment { comment: Option<CommentId> },
    /// A pull request review was submitted, edited or dismissed.
    PullRequestReview { review: Option<ReviewId> },
    /// Any event that cannot be reacted to.
    Other { name: String },
}

#[derive(serde::Deserialize, Debug)]
struct Identified<T> {
    id: Option<T>,
}

#[derive(serde::Deserialize, Debug)]
struct CommentPayload {
    comment: Option<Identified<CommentId>>,
}

#[derive(serde::Deserialize, Debug)]
struct ReviewPayload {
    review: Option<Identified<ReviewId>>,
}

impl GithubEvent {
    /// Decodes the event with the given name from its JSON payload.
    ///
    /// The payload is interpreted structurally and never rejected: a missing or malformed
    /// identifier only means that there is nothing to react to.
    pub fn from_payload(name: &str, body: &[u8]) -> Self {
        match name {
            "issue_comment" => GithubEvent::IssueComment {
                comment: parse_comment_id(name, body),
            },
            "pull_request_review_comment" => GithubEvent::PullRequestReviewComment {
                comment: parse_comment_id(name, body),
            },
            "pull_request_review" => GithubEvent::PullRequestReview {
                review: decode::<ReviewPayload>(name, body)
                    .and_then(|payload| payload.review)
                    .and_then(|review| review.id),
            },
            _ => {
                tracing::debug!("Event {name} cannot be reacted to");
                GithubEvent::Other {
                    name: name.to_string(),
                }
            }
        }
    }

    /// Name of the event, as used by the `x-github-event` header and `GITHUB_EVENT_NAME`.
    pub fn name(&self) -> &str {
        match self {
            GithubEvent::IssueComment { .. } => "issue_comment",
            GithubEvent::PullRequestReviewComment { .. } => "pull_request_review_comment",
            GithubEvent::PullRequestReview { .. } => "pull_request_review",
            GithubEvent::Other { name } => name,
        }
    }
}

fn parse_comment_id(name: &str, body: &[u8]) -> Option<CommentId> {
    decode::<CommentPayload>(name, body)
        .and_then(|payload| payload.comment)
        .and_then(|comment| comment.id)
        // GitHub never assigns zero, so it is treated as a missing identifier.
        .filter(|id| id.0 != 0)
}

fn decode<T: DeserializeOwned>(name: &str, body: &[u8]) -> Option<T> {
    match serde_json::from_slice(body) {
        Ok(payload) => Some(payload),
        Err(error) => {
            tracing::warn!("Cannot decode payload of event {name}: {error:?}");
            None
        }
    }
}

/// Describes the event that triggered the current automation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
    pub repository: GithubRepoName,
    pub event: GithubEvent,
}

impl EventContext {
    pub fn new(repository: GithubRepoName, event: GithubEvent) -> Self {
        Self { repository, event }
    }

    /// Loads the context from the event payload file written by GitHub Actions
    /// (the file referenced by `GITHUB_EVENT_PATH`).
    pub fn load(
        event_name: &str,
        repository: GithubRepoName,
        event_path: &Path,
    ) -> anyhow::Result<Self> {
        let body = std::fs::read(event_path)
            .with_context(|| format!("Cannot read event payload from {}", event_path.display()))?;
        let event = GithubEvent::from_payload(event_name, &body);
        tracing::debug!("Loaded event {event:?} for {repository}");
        Ok(Self::new(repository, event))
    }

    pub fn event_name(&self) -> &str {
        self.event.name()
    }
}
