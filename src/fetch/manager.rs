//! Concurrent batch fetching.
//!
//! # Responsibilities
//! - Issue one outbound GET per input URL, all concurrently
//! - Aggregate bodies keyed by input position
//! - Abort the whole batch on the first transport error
//! - Stop waiting as soon as the request scope is cancelled

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Errors that can end a batch fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// An outbound call failed at the transport level (connect, timeout,
    /// body read). Carries the first failure observed.
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The request scope was cancelled before the batch finished.
    #[error("batch cancelled")]
    Cancelled,
}

/// Executes batches of outbound fetches against a shared HTTP client.
pub struct FetchManager {
    client: reqwest::Client,
}

impl FetchManager {
    /// Build the manager with a per-call total timeout.
    ///
    /// The timeout covers the full call including body read. Connection
    /// pooling across batches is whatever the client provides.
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch every URL concurrently and return the bodies keyed by input
    /// position, or the first error.
    ///
    /// The caller is trusted to have validated `urls` (size and syntax).
    /// Three signals race for the outcome: scope cancellation, the first
    /// per-task transport error, and completion of all tasks. On an error
    /// or cancellation outcome the remaining in-flight tasks are detached
    /// rather than awaited; they keep running until `scope` is cancelled
    /// and whatever they fetched is discarded. Known limitation, kept
    /// deliberately.
    pub async fn fetch_all(
        &self,
        scope: &CancellationToken,
        urls: Vec<Url>,
    ) -> Result<BTreeMap<usize, String>, FetchError> {
        let results = Arc::new(Mutex::new(BTreeMap::new()));
        let (err_tx, mut err_rx) = mpsc::channel::<reqwest::Error>(1);

        let mut tasks = JoinSet::new();
        for (index, url) in urls.into_iter().enumerate() {
            let client = self.client.clone();
            let results = Arc::clone(&results);
            let err_tx = err_tx.clone();
            let scope = scope.clone();

            tasks.spawn(async move {
                let fetched = tokio::select! {
                    _ = scope.cancelled() => return,
                    fetched = fetch_body(&client, url) => fetched,
                };
                match fetched {
                    Ok(body) => {
                        results.lock().await.insert(index, body);
                    }
                    Err(err) => {
                        // Only the first error is kept; the batch is
                        // already failed when a second one arrives.
                        let _ = err_tx.try_send(err);
                    }
                }
            });
        }
        drop(err_tx);

        enum Outcome {
            Cancelled,
            Failed(reqwest::Error),
            Drained,
        }

        let outcome = tokio::select! {
            _ = scope.cancelled() => Outcome::Cancelled,
            Some(err) = err_rx.recv() => Outcome::Failed(err),
            _ = async { while tasks.join_next().await.is_some() {} } => Outcome::Drained,
        };

        match outcome {
            Outcome::Cancelled => {
                tracing::debug!("Batch cancelled, abandoning in-flight fetches");
                tasks.detach_all();
                Err(FetchError::Cancelled)
            }
            Outcome::Failed(err) => {
                tracing::warn!(error = %err, "Batch failed, abandoning in-flight fetches");
                tasks.detach_all();
                Err(FetchError::Upstream(err))
            }
            // All tasks finished, but one may have failed in the same
            // instant the drain completed. Check the error channel before
            // exposing the map so a partial set never leaves this function.
            Outcome::Drained => match err_rx.try_recv() {
                Ok(err) => Err(FetchError::Upstream(err)),
                Err(_) => Ok(std::mem::take(&mut *results.lock().await)),
            },
        }
    }
}

/// Single outbound call: GET and read the full body as text.
///
/// The response status is not inspected; an upstream 404 or 500 is still a
/// fetched body.
async fn fetch_body(client: &reqwest::Client, url: Url) -> Result<String, reqwest::Error> {
    client.get(url).send().await?.text().await
}
