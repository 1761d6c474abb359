//! Acknowledges the event that triggered an automation run by reacting to it with an emoji.
//!
//! Reactions are a courtesy signal: [`notify`] absorbs every failure into the log, so that a
//! missing permission or a deleted comment never fails the run that requested the reaction.
use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use tracing::Instrument;

use crate::github::event::{EventContext, GithubEvent};
use crate::github::{CommentId, GithubRepoName, ReactionKind, ReviewId};
use crate::utils::logging::LogFailure;

mod error;

pub use error::ReactionError;

/// Provides the reaction operations of a remote repository host.
#[async_trait]
pub trait ReactionClient: Send + Sync {
    /// Add a reaction to an issue or pull request conversation comment.
    async fn react_to_issue_comment(
        &self,
        repo: &GithubRepoName,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> anyhow::Result<()>;

    /// Add a reaction to a pull request review comment.
    async fn react_to_review_comment(
        &self,
        repo: &GithubRepoName,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> anyhow::Result<()>;
}

/// The entity that receives the reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionTarget {
    Comment(CommentId),
    Review(ReviewId),
}

impl ReactionTarget {
    /// Finds the comment or review that caused the given event, if there is one.
    pub fn resolve(event: &GithubEvent) -> Option<Self> {
        match event {
            GithubEvent::IssueComment { comment }
            | GithubEvent::PullRequestReviewComment { comment } => {
                comment.map(ReactionTarget::Comment)
            }
            GithubEvent::PullRequestReview { review } => review.map(ReactionTarget::Review),
            GithubEvent::Other { .. } => None,
        }
    }
}

impl Display for ReactionTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionTarget::Comment(id) => write!(f, "comment {id}"),
            ReactionTarget::Review(id) => write!(f, "PR review {id}"),
        }
    }
}

/// Reacts to the comment or review that triggered the event in `context`.
///
/// At most one remote call is made. When the event carries nothing to react to, no call is made
/// and [`ReactionError::NoTarget`] is returned.
pub async fn try_react<Client: ReactionClient + ?Sized>(
    client: &Client,
    context: &EventContext,
    reaction: ReactionKind,
) -> Result<ReactionTarget, ReactionError> {
    let Some(target) = ReactionTarget::resolve(&context.event) else {
        return Err(ReactionError::NoTarget {
            event: context.event_name().to_string(),
        });
    };

    let result = match target {
        ReactionTarget::Comment(comment) => {
            client
                .react_to_issue_comment(&context.repository, comment, reaction)
                .await
        }
        // Reviews are sent to the review comment endpoint, with the review ID in place of the
        // comment ID.
        ReactionTarget::Review(review) => {
            client
                .react_to_review_comment(&context.repository, CommentId(review.0), reaction)
                .await
        }
    };
    result.map_err(|source| ReactionError::Rejected { target, source })?;
    Ok(target)
}

/// Reacts to the event in `context` with `reaction` (or 👀 if there is none).
///
/// This never fails: a missing target and a rejected API call are only logged.
pub async fn notify<Client: ReactionClient + ?Sized>(
    client: &Client,
    context: &EventContext,
    reaction: Option<ReactionKind>,
) {
    let reaction = reaction.unwrap_or_default();
    let span = tracing::info_span!(
        "Reaction",
        repo = context.repository.to_string(),
        event = context.event_name(),
        reaction = reaction.as_str()
    );

    match try_react(client, context, reaction)
        .instrument(span.clone())
        .await
    {
        Ok(target) => span.in_scope(|| {
            tracing::info!("Added {reaction} reaction to {target}");
        }),
        Err(ReactionError::NoTarget { .. }) => span.in_scope(|| {
            tracing::info!("No comment ID found for reaction, skipping");
        }),
        Err(ReactionError::Rejected { target, source }) => {
            span.log_warning(&source.context(format!("Failed to add reaction to {target}")));
        }
    }
}
