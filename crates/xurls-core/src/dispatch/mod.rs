//! Fixed worker pool draining the raw-input queue.
//!
//! `workers` tasks share one receiver. Each takes an item, runs the
//! [`Processor`], drops empty values, optionally filters through the
//! [`SeenSet`], and forwards the rest to the output sink. Ordering across
//! items is not preserved; values from one item keep their order.

mod output;
mod processor;
mod seen;

pub use output::write_lines;
pub use processor::{DiscoverProcessor, DissectProcessor, Processor};
pub use seen::SeenSet;

use anyhow::Result;
use std::ops::AddAssign;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Counters for one dispatcher run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Items taken from the queue.
    pub inputs: u64,
    /// Items the processor rejected.
    pub failures: u64,
    /// Values forwarded to the sink.
    pub emitted: u64,
    /// Values suppressed by the seen set.
    pub duplicates: u64,
}

impl AddAssign for DispatchStats {
    fn add_assign(&mut self, other: Self) {
        self.inputs += other.inputs;
        self.failures += other.failures;
        self.emitted += other.emitted;
        self.duplicates += other.duplicates;
    }
}

pub struct Dispatcher<P> {
    processor: Arc<P>,
    workers: usize,
    unique: bool,
}

impl<P: Processor> Dispatcher<P> {
    /// `workers` is clamped to at least 1.
    pub fn new(processor: P, workers: usize, unique: bool) -> Self {
        Self {
            processor: Arc::new(processor),
            workers: workers.max(1),
            unique,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run the pool until `rx` is closed and drained.
    ///
    /// A closed sink stops the affected worker early; remaining workers
    /// stop as soon as they try to emit.
    pub async fn run(&self, rx: mpsc::Receiver<String>, sink: mpsc::Sender<String>) -> Result<DispatchStats> {
        let rx = Arc::new(Mutex::new(rx));
        let seen = self.unique.then(|| Arc::new(SeenSet::new()));
        let mut join_set = tokio::task::JoinSet::new();

        tracing::debug!(workers = self.workers, unique = self.unique, "starting workers");
        for worker_id in 0..self.workers {
            let rx = Arc::clone(&rx);
            let processor = Arc::clone(&self.processor);
            let seen = seen.clone();
            let sink = sink.clone();
            join_set.spawn(async move { run_worker(worker_id, rx, processor, seen, sink).await });
        }
        drop(sink);

        let mut stats = DispatchStats::default();
        while let Some(res) = join_set.join_next().await {
            stats += res.map_err(|e| anyhow::anyhow!("worker task join: {}", e))?;
        }

        tracing::debug!(?stats, "workers finished");
        Ok(stats)
    }
}

async fn run_worker<P: Processor>(
    worker_id: usize,
    rx: Arc<Mutex<mpsc::Receiver<String>>>,
    processor: Arc<P>,
    seen: Option<Arc<SeenSet>>,
    sink: mpsc::Sender<String>,
) -> DispatchStats {
    let mut stats = DispatchStats::default();
    loop {
        let next = { rx.lock().await.recv().await };
        let Some(raw) = next else {
            tracing::trace!(worker_id, "queue closed");
            break;
        };
        stats.inputs += 1;

        let values = match processor.process(&raw) {
            Ok(values) => values,
            Err(e) => {
                stats.failures += 1;
                tracing::error!(url = %raw, error = %e, "parsing failed");
                continue;
            }
        };

        for value in values {
            if value.is_empty() {
                continue;
            }
            if let Some(seen) = &seen {
                if !seen.insert(&value) {
                    stats.duplicates += 1;
                    continue;
                }
            }
            if sink.send(value).await.is_err() {
                tracing::warn!(worker_id, "output closed; worker stopping");
                return stats;
            }
            stats.emitted += 1;
        }
    }
    stats
}
