use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::github::api::client::GithubReactionClient;
use crate::github::api::{create_github_client, GithubToken};
use crate::github::{GithubRepoName, ReactionKind};

/// Which reactions endpoint a request is expected on.
#[derive(Clone, Copy)]
pub enum CommentKind {
    Issue,
    PullRequestReview,
}

impl CommentKind {
    fn section(&self) -> &'static str {
        match self {
            CommentKind::Issue => "issues",
            CommentKind::PullRequestReview => "pulls",
        }
    }
}

/// Simulates the reactions endpoints of the GitHub REST API.
pub struct GitHubMockServer {
    mock_server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        let mock_server = MockServer::start().await;

        // Anything that was not explicitly expected refers to a comment that does not exist.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/reactions/reactions"
            })))
            .with_priority(u8::MAX)
            .mount(&mock_server)
            .await;

        Self { mock_server }
    }

    pub fn client(&self) -> GithubReactionClient {
        let url = self.mock_server.uri().parse().unwrap();
        let token = GithubToken::new("ghs_test_token".to_string());
        GithubReactionClient::new(create_github_client(&url, &token).unwrap())
    }

    /// Expects exactly one reaction request for the given comment, answered with `status`.
    pub async fn expect_reaction(
        &self,
        repo: &GithubRepoName,
        kind: CommentKind,
        comment: u64,
        reaction: ReactionKind,
        status: u16,
    ) {
        let response = if status < 300 {
            ResponseTemplate::new(status).set_body_json(json!({
                "id": 1,
                "node_id": "MDg6UmVhY3Rpb24x",
                "content": reaction,
                "created_at": "2023-10-03T12:41:19Z"
            }))
        } else {
            ResponseTemplate::new(status).set_body_json(json!({
                "message": "Resource not accessible by integration",
                "documentation_url": "https://docs.github.com/rest/reactions/reactions"
            }))
        };

        self.expect_reaction_response(repo, kind, comment, reaction, response)
            .await;
    }

    /// Expects exactly one reaction request for the given comment, answered with `response`.
    pub async fn expect_reaction_response(
        &self,
        repo: &GithubRepoName,
        kind: CommentKind,
        comment: u64,
        reaction: ReactionKind,
        response: ResponseTemplate,
    ) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/repos/{repo}/{}/comments/{comment}/reactions",
                kind.section()
            )))
            .and(body_json(json!({ "content": reaction })))
            .respond_with(response)
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    /// Paths of all requests received so far.
    pub async fn received_paths(&self) -> Vec<String> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}
