use http::StatusCode;
use octocrab::Octocrab;
use thiserror::Error;

use crate::github::{CommentId, GithubRepoName, ReactionKind};

#[derive(Error, Debug)]
pub enum ReactionApiError {
    #[error("Missing permission to create reactions")]
    Forbidden,
    #[error("Comment not found")]
    NotFound,
    #[error("Unknown error ({status}): {message}")]
    Unknown { status: StatusCode, message: String },
    #[error("Network error: {0}")]
    Network(#[source] octocrab::Error),
}

#[derive(serde::Serialize)]
struct ReactionRequest {
    content: ReactionKind,
}

#[derive(serde::Deserialize)]
struct ReactionResponse {
    id: u64,
    content: ReactionKind,
}

/// Adds a reaction to an issue (or pull request conversation) comment.
///
/// Documentation: https://docs.github.com/en/rest/reactions/reactions?apiVersion=2022-11-28#create-reaction-for-an-issue-comment
pub async fn create_issue_comment_reaction(
    client: &Octocrab,
    repo: &GithubRepoName,
    comment: CommentId,
    reaction: ReactionKind,
) -> Result<(), ReactionApiError> {
    let url = format!("/repos/{repo}/issues/comments/{comment}/reactions");
    create_reaction(client, url, reaction).await
}

/// Adds a reaction to a pull request review comment.
///
/// Documentation: https://docs.github.com/en/rest/reactions/reactions?apiVersion=2022-11-28#create-reaction-for-a-pull-request-review-comment
pub async fn create_review_comment_reaction(
    client: &Octocrab,
    repo: &GithubRepoName,
    comment: CommentId,
    reaction: ReactionKind,
) -> Result<(), ReactionApiError> {
    let url = format!("/repos/{repo}/pulls/comments/{comment}/reactions");
    create_reaction(client, url, reaction).await
}

/// GitHub answers 201 for a new reaction and 200 if the same reaction already exists,
/// both are treated as success.
async fn create_reaction(
    client: &Octocrab,
    url: String,
    reaction: ReactionKind,
) -> Result<(), ReactionApiError> {
    let request = ReactionRequest { content: reaction };
    let response = client._post(url.as_str(), Some(&request)).await;

    match response {
        Ok(response) => {
            let status = response.status();
            let text = client.body_to_string(response).await.unwrap_or_default();

            tracing::trace!("Response from creating reaction via `{url}`: {status} ({text})");

            match status {
                StatusCode::OK | StatusCode::CREATED => {
                    // The body is informational only, the status already confirms the reaction.
                    if let Ok(response) = serde_json::from_str::<ReactionResponse>(&text) {
                        tracing::trace!(
                            "Created reaction {} ({}) via `{url}`",
                            response.id,
                            response.content
                        );
                    }
                    Ok(())
                }
                StatusCode::FORBIDDEN => Err(ReactionApiError::Forbidden),
                StatusCode::NOT_FOUND => Err(ReactionApiError::NotFound),
                _ => Err(ReactionApiError::Unknown {
                    status,
                    message: text,
                }),
            }
        }
        Err(error) => {
            tracing::debug!("Creating reaction via `{url}` failed: {error:?}");
            Err(ReactionApiError::Network(error))
        }
    }
}
