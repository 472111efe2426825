//! Fetch-and-print pipeline
//!
//! A producer task pulls posts from the timeline API and hands their text,
//! one at a time and in retrieval order, to a consumer that expands each
//! into a banner and writes it out. The consumer stops when the producer
//! drops its end of the channel.

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tweetfmt_banner::{BorderGlyphs, TextExpander};

use crate::domain::entities::{BearerToken, ConsumerCredentials};
use crate::domain::ports::TimelineApi;
use crate::error::PipelineError;

/// Smallest buffer tokio allows; each send waits for the previous item to be taken
const HANDOFF_CAPACITY: usize = 1;

/// What a completed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub fetched: usize,
    pub printed: usize,
}

pub struct Pipeline<T: TimelineApi> {
    api: Arc<T>,
    account: String,
    count: u32,
}

impl<T: TimelineApi + 'static> Pipeline<T> {
    pub fn new(api: Arc<T>, account: impl Into<String>, count: u32) -> Self {
        Self {
            api,
            account: account.into(),
            count,
        }
    }

    /// Exchange consumer credentials for the token `run` needs
    pub async fn authenticate(
        &self,
        credentials: &ConsumerCredentials,
    ) -> Result<BearerToken, PipelineError> {
        self.api
            .fetch_bearer_token(credentials)
            .await
            .map_err(PipelineError::Credentials)
    }

    /// Fetch the timeline and write one banner per post to `out`.
    ///
    /// The consumer runs on the calling task, the producer on a spawned one.
    /// A fetch failure is returned after every item already handed off has
    /// been written. A write failure stops the producer at its next send.
    pub async fn run<W>(
        &self,
        token: BearerToken,
        out: &mut W,
    ) -> Result<PipelineSummary, PipelineError>
    where
        W: AsyncWrite + Unpin,
    {
        let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);

        let producer = tokio::spawn(produce(
            self.api.clone(),
            token,
            self.account.clone(),
            self.count,
            tx,
        ));

        let consumed = consume(rx, out).await;
        let produced = producer.await?;

        let printed = consumed?;
        let fetched = produced?;
        tracing::debug!(fetched, printed, "Pipeline finished");

        Ok(PipelineSummary { fetched, printed })
    }
}

async fn produce<T: TimelineApi>(
    api: Arc<T>,
    token: BearerToken,
    account: String,
    count: u32,
    tx: mpsc::Sender<String>,
) -> Result<usize, PipelineError> {
    tracing::info!(account = %account, count, "Getting tweets");

    let posts = api
        .fetch_timeline(&token, &account, count)
        .await
        .map_err(PipelineError::Fetch)?;

    let fetched = posts.len();
    for post in posts {
        tracing::debug!(id = ?post.id_str, "Handing off post");
        if tx.send(post.text).await.is_err() {
            tracing::warn!("Consumer stopped early, dropping remaining posts");
            break;
        }
    }

    Ok(fetched)
}

async fn consume<W>(mut rx: mpsc::Receiver<String>, out: &mut W) -> Result<usize, PipelineError>
where
    W: AsyncWrite + Unpin,
{
    let expander = TextExpander::new(BorderGlyphs);
    let mut printed = 0;

    while let Some(text) = rx.recv().await {
        let banner = expander.expand(&text);
        out.write_all(format!("{}\n", banner).as_bytes()).await?;
        printed += 1;
    }

    out.flush().await?;
    Ok(printed)
}
