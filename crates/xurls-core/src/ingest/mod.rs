//! Input ingestion: explicit URLs, then a list file, then piped stdin.
//!
//! Lines are cleaned and sent, in order, into a bounded queue. A full queue
//! blocks the producer until workers catch up.

mod clean;

pub use clean::LineCleaner;

use anyhow::{anyhow, Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Where raw input comes from, in priority order.
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    /// URLs given on the command line.
    pub urls: Vec<String>,
    /// File with one URL per line.
    pub list: Option<PathBuf>,
    /// Read standard input after the other sources.
    pub stdin: bool,
}

impl InputSources {
    /// Sources with `stdin` enabled only when input is piped, not a terminal.
    pub fn with_piped_stdin(urls: Vec<String>, list: Option<PathBuf>) -> Self {
        Self {
            urls,
            list,
            stdin: stdin_is_piped(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.list.is_none() && !self.stdin
    }
}

pub fn stdin_is_piped() -> bool {
    !std::io::stdin().is_terminal()
}

/// Feed every source into `tx`. Returns the number of items sent.
///
/// A list file that cannot be opened or read is an error; sources after it
/// are not read. Items already queued stay queued for the workers.
pub async fn feed(sources: InputSources, cleaner: LineCleaner, tx: mpsc::Sender<String>) -> Result<u64> {
    let mut sent = 0u64;

    for url in &sources.urls {
        if let Some(line) = cleaner.clean(url) {
            send(&tx, line).await?;
            sent += 1;
        }
    }

    if let Some(path) = &sources.list {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("open list file {}", path.display()))?;
        let label = path.display().to_string();
        sent += feed_reader(BufReader::new(file), &label, cleaner, &tx).await?;
    }

    if sources.stdin {
        sent += feed_reader(BufReader::new(tokio::io::stdin()), "stdin", cleaner, &tx).await?;
    }

    tracing::debug!(sent, "input exhausted");
    Ok(sent)
}

/// Feed one line-oriented reader. `label` names the source in errors.
///
/// Lines are split on `\n` and decoded lossily, so invalid UTF-8 never
/// aborts a scan.
pub async fn feed_reader<R>(
    mut reader: R,
    label: &str,
    cleaner: LineCleaner,
    tx: &mpsc::Sender<String>,
) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
{
    let mut sent = 0u64;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .await
            .with_context(|| format!("read {label}"))?;
        if n == 0 {
            break;
        }
        if let Some(line) = cleaner.clean(&String::from_utf8_lossy(&buf)) {
            send(tx, line).await?;
            sent += 1;
        }
    }
    tracing::debug!(source = label, sent, "source drained");
    Ok(sent)
}

async fn send(tx: &mpsc::Sender<String>, line: String) -> Result<()> {
    tx.send(line)
        .await
        .map_err(|_| anyhow!("input queue closed before all input was sent"))
}
