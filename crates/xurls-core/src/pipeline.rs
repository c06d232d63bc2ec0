//! Wires ingestion to the worker pool.
//!
//! input sources → bounded queue → dispatcher workers → output sink.

use anyhow::{anyhow, Result};
use std::future::Future;
use tokio::sync::mpsc;

use crate::dispatch::{DispatchStats, Dispatcher, Processor};
use crate::ingest::{self, InputSources, LineCleaner};

/// Feed `sources` through `dispatcher` into `sink`.
///
/// The producer runs as its own task so a full queue only blocks it, not the
/// workers. If an input source fails, whatever was already queued is still
/// processed; the error is returned once the workers are done.
pub async fn run_pipeline<P: Processor>(
    sources: InputSources,
    cleaner: LineCleaner,
    dispatcher: &Dispatcher<P>,
    queue_capacity: usize,
    sink: mpsc::Sender<String>,
) -> Result<DispatchStats> {
    run_with_feed(
        move |tx| ingest::feed(sources, cleaner, tx),
        dispatcher,
        queue_capacity,
        sink,
    )
    .await
}

/// Like [`run_pipeline`], with a caller-supplied producer.
///
/// `feed` receives the queue's sender and returns the number of items sent.
pub async fn run_with_feed<P, F, Fut>(
    feed: F,
    dispatcher: &Dispatcher<P>,
    queue_capacity: usize,
    sink: mpsc::Sender<String>,
) -> Result<DispatchStats>
where
    P: Processor,
    F: FnOnce(mpsc::Sender<String>) -> Fut,
    Fut: Future<Output = Result<u64>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(queue_capacity.max(1));
    let producer = tokio::spawn(feed(tx));

    let stats = dispatcher.run(rx, sink).await?;

    let fed = producer
        .await
        .map_err(|e| anyhow!("input task join: {}", e))?;
    tracing::info!(
        inputs = stats.inputs,
        failures = stats.failures,
        emitted = stats.emitted,
        duplicates = stats.duplicates,
        "pipeline finished"
    );
    fed?;
    Ok(stats)
}
