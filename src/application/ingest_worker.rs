//! Background worker persisting queued commit batches.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{error, info};

use crate::application::services::IngestService;
use crate::domain::commit_batch::CommitBatch;

const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(100);

/// Consumes commit batches from the channel and persists them.
///
/// Each batch is retried with jittered exponential backoff before being
/// dropped; a dropped batch is logged and counted but does not stop the
/// worker. The worker exits when all senders are closed.
///
/// # Metrics
///
/// - `ingest_commits_inserted` - commits actually written (post-dedup)
/// - `ingest_batches_failed` - batches dropped after exhausting retries
pub async fn run_ingest_worker(mut rx: mpsc::Receiver<CommitBatch>, ingest: Arc<IngestService>) {
    info!("Ingest worker started");

    while let Some(batch) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(INITIAL_BACKOFF.as_millis() as u64)
            .map(jitter)
            .take(MAX_RETRIES);

        let ingest = ingest.clone();
        let result = Retry::spawn(strategy, move || {
            let ingest = ingest.clone();
            let batch = batch.clone();
            async move { ingest.persist_batch(batch).await }
        })
        .await;

        match result {
            Ok(inserted) => {
                counter!("ingest_commits_inserted").increment(inserted);
            }
            Err(e) => {
                counter!("ingest_batches_failed").increment(1);
                error!("Dropping commit batch after {} retries: {}", MAX_RETRIES, e);
            }
        }
    }

    info!("Ingest worker stopped");
}
