use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ackbot::github::event::EventContext;
use ackbot::github::{CommentId, GithubRepoName, ReactionKind};
use ackbot::notifier::{notify, ReactionClient};
use async_trait::async_trait;

const ROOT_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Records reactions as `(endpoint, repository, comment, reaction)` tuples.
#[derive(Default)]
struct RecordingClient {
    reactions: Mutex<Vec<(&'static str, String, u64, ReactionKind)>>,
}

#[async_trait]
impl ReactionClient for RecordingClient {
    async fn react_to_issue_comment(
        &self,
        repo: &GithubRepoName,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> anyhow::Result<()> {
        self.reactions
            .lock()
            .unwrap()
            .push(("issues", repo.to_string(), comment.0, reaction));
        Ok(())
    }

    async fn react_to_review_comment(
        &self,
        repo: &GithubRepoName,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> anyhow::Result<()> {
        self.reactions
            .lock()
            .unwrap()
            .push(("pulls", repo.to_string(), comment.0, reaction));
        Ok(())
    }
}

fn event_file(name: &str) -> PathBuf {
    Path::new(ROOT_DIR)
        .join("tests")
        .join("data")
        .join("event")
        .join(name)
}

async fn react(event_name: &str, file: &str, reaction: Option<ReactionKind>) -> RecordingClient {
    let repository: GithubRepoName = "Rust-Lang/Bors".parse().unwrap();
    let context = EventContext::load(event_name, repository, &event_file(file)).unwrap();
    let client = RecordingClient::default();
    notify(&client, &context, reaction).await;
    client
}

#[tokio::test]
async fn issue_comment_payload() {
    let client = react("issue_comment", "issue-comment.json", None).await;
    assert_eq!(
        client.reactions.into_inner().unwrap(),
        vec![(
            "issues",
            "rust-lang/bors".to_string(),
            1734291043,
            ReactionKind::Eyes
        )]
    );
}

#[tokio::test]
async fn review_comment_payload() {
    let client = react(
        "pull_request_review_comment",
        "pull-request-review-comment.json",
        Some(ReactionKind::Hooray),
    )
    .await;
    assert_eq!(
        client.reactions.into_inner().unwrap(),
        vec![(
            "issues",
            "rust-lang/bors".to_string(),
            1406719362,
            ReactionKind::Hooray
        )]
    );
}

#[tokio::test]
async fn review_payload() {
    let client = react(
        "pull_request_review",
        "pull-request-review.json",
        Some(ReactionKind::PlusOne),
    )
    .await;
    assert_eq!(
        client.reactions.into_inner().unwrap(),
        vec![(
            "pulls",
            "rust-lang/bors".to_string(),
            1652371208,
            ReactionKind::PlusOne
        )]
    );
}

#[tokio::test]
async fn push_payload() {
    let client = react("push", "push.json", Some(ReactionKind::Laugh)).await;
    assert!(client.reactions.into_inner().unwrap().is_empty());
}

#[tokio::test]
async fn mismatched_payload() {
    // A push payload delivered under a comment event name has no comment to react to.
    let client = react("issue_comment", "push.json", None).await;
    assert!(client.reactions.into_inner().unwrap().is_empty());
}
