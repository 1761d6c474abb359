use anyhow::Context;
use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::api::operations::{
    create_issue_comment_reaction, create_review_comment_reaction,
};
use crate::github::{CommentId, GithubRepoName, ReactionKind};
use crate::notifier::ReactionClient;

/// Creates reactions using the GitHub REST API.
pub struct GithubReactionClient {
    client: Octocrab,
}

impl GithubReactionClient {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Octocrab {
        &self.client
    }
}

#[async_trait]
impl ReactionClient for GithubReactionClient {
    async fn react_to_issue_comment(
        &self,
        repo: &GithubRepoName,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> anyhow::Result<()> {
        create_issue_comment_reaction(self.client(), repo, comment, reaction)
            .await
            .with_context(|| format!("Cannot react to comment {comment} in {repo}"))?;
        Ok(())
    }

    async fn react_to_review_comment(
        &self,
        repo: &GithubRepoName,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> anyhow::Result<()> {
        create_review_comment_reaction(self.client(), repo, comment, reaction)
            .await
            .with_context(|| format!("Cannot react to review comment {comment} in {repo}"))?;
        Ok(())
    }
}
