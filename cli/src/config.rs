use clap::Parser;

use crate::adapters::twitter::DEFAULT_API_URL;
use crate::domain::entities::ConsumerCredentials;

/// Simple Twitter reformatter: prints recent tweets as large-character banners
#[derive(Parser, Clone)]
#[command(name = "tweetfmt")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Twitter consumer key
    #[arg(long, env = "TWEETFMT_KEY", default_value = "nokey", hide_env_values = true)]
    pub key: String,

    /// Twitter consumer secret
    #[arg(
        long = "sec",
        env = "TWEETFMT_SECRET",
        default_value = "nosecret",
        hide_env_values = true
    )]
    pub secret: String,

    /// Debug logging level (dumps every request and response)
    #[arg(long)]
    pub debug: bool,

    /// Number of tweets to retrieve
    #[arg(long = "num", default_value_t = 3)]
    pub num_tweets: u32,

    /// Account whose timeline is fetched
    #[arg(long, env = "TWEETFMT_USER", default_value = "iamdevloper")]
    pub user: String,

    /// Base URL of the API
    #[arg(long, env = "TWEETFMT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Config {
    /// Parse the command line, after loading `.env` so it can feed the env fallbacks
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn credentials(&self) -> ConsumerCredentials {
        ConsumerCredentials::new(self.key.clone(), self.secret.clone())
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "tweetfmt=debug"
        } else {
            "tweetfmt=info"
        }
    }
}
