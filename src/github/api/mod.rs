use std::convert::Infallible;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

pub mod client;
pub(crate) mod operations;

pub use operations::ReactionApiError;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Wrapper for an API token which is zeroed on drop and can be exposed only through the
/// [`GithubToken::expose`] method.
#[derive(Clone, Debug)]
pub struct GithubToken(Arc<SecretString>);

impl GithubToken {
    pub fn new(token: String) -> Self {
        Self(Arc::new(SecretString::new(token)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret().as_str()
    }
}

impl FromStr for GithubToken {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value.to_string()))
    }
}

/// Creates a GitHub client that authenticates with the given (personal or installation) token.
///
/// `api_url` is the REST API root, which differs from the default on GitHub Enterprise.
pub fn create_github_client(api_url: &Url, token: &GithubToken) -> anyhow::Result<Octocrab> {
    Octocrab::builder()
        .base_uri(api_url.as_str().trim_end_matches('/'))
        .with_context(|| format!("Invalid GitHub API URL {api_url}"))?
        .personal_token(token.expose().to_string())
        .build()
        .context("Could not create octocrab client")
}
