//! Shared driver: pipeline results written to stdout, one per line.

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use xurls_core::dispatch::{write_lines, Dispatcher, Processor};
use xurls_core::ingest::{InputSources, LineCleaner};
use xurls_core::pipeline::run_pipeline;

pub async fn run_to_stdout<P: Processor>(
    sources: InputSources,
    cleaner: LineCleaner,
    dispatcher: &Dispatcher<P>,
    queue_capacity: usize,
) -> Result<()> {
    if sources.is_empty() {
        tracing::warn!("no input: pass URLs with -u, a file with -l, or pipe text on stdin");
        return Ok(());
    }

    let (out_tx, out_rx) = mpsc::channel(queue_capacity.max(1));
    let writer = tokio::spawn(write_lines(out_rx, tokio::io::stdout()));

    let result = run_pipeline(sources, cleaner, dispatcher, queue_capacity, out_tx).await;
    let written = writer
        .await
        .map_err(|e| anyhow!("output task join: {}", e))?;

    // A failed writer closes the sink, which in turn fails the pipeline;
    // report the writer's error as the cause.
    let written = written?;
    let stats = result?;
    tracing::debug!(written, ?stats, "done");
    Ok(())
}
