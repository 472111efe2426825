//! tweetfmt
//!
//! Fetches the latest posts from a Twitter timeline and prints each one as a
//! large-character banner.
//!
//! The flow is authenticate → fetch → expand → print. Every failure travels
//! back here as a `Result`; `main` is the only place that decides to exit.

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

use adapters::TwitterClient;
use app::Pipeline;
use config::Config;

const INTRO: &str = "SIMPLE TWITTER REFORMATTER \n (╯°□°）╯︵ ┻━┻) \n";

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::load();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(INTRO.as_bytes()).await?;
    stdout.flush().await?;

    let client =
        TwitterClient::new(&config.api_url, config.debug).context("Failed to build HTTP client")?;
    let pipeline = Pipeline::new(Arc::new(client), config.user.clone(), config.num_tweets);

    let token = pipeline.authenticate(&config.credentials()).await?;
    let summary = pipeline.run(token, &mut stdout).await?;

    tracing::info!(fetched = summary.fetched, printed = summary.printed, "Done");
    Ok(())
}
