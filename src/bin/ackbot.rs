use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use ackbot::github::api::client::GithubReactionClient;
use ackbot::github::api::{create_github_client, GithubToken, DEFAULT_GITHUB_API_URL};
use ackbot::github::event::EventContext;
use ackbot::github::{GithubRepoName, ReactionKind};
use ackbot::notifier::notify;

/// Reacts to the comment or review that triggered the current GitHub Actions run.
#[derive(clap::Parser)]
struct Opts {
    /// Token used to authenticate to the GitHub API.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: GithubToken,

    /// Name of the event that triggered the run.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,

    /// Repository in the `owner/name` format.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: GithubRepoName,

    /// Path to the JSON payload of the event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Root of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    api_url: Url,

    /// Reaction to add (+1, -1, laugh, confused, heart, hooray, rocket, eyes).
    #[arg(long, env = "ACKBOT_REACTION")]
    reaction: Option<ReactionKind>,
}

fn try_main(opts: Opts) -> anyhow::Result<()> {
    let Opts {
        token,
        event_name,
        repository,
        event_path,
        api_url,
        reaction,
    } = opts;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    let context = EventContext::load(&event_name, repository, &event_path)?;

    runtime.block_on(async move {
        let client = GithubReactionClient::new(create_github_client(&api_url, &token)?);
        notify(&client, &context, reaction).await;
        anyhow::Ok(())
    })?;

    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}
