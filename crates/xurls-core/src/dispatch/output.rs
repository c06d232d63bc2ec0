//! Output writer: one value per line.

use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;

/// Drain `rx` into `writer`, newline-terminated, until every sender is gone.
/// Returns the number of lines written.
pub async fn write_lines<W>(mut rx: mpsc::Receiver<String>, writer: W) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut out = BufWriter::new(writer);
    let mut written = 0u64;
    while let Some(value) = rx.recv().await {
        out.write_all(value.as_bytes()).await.context("write output")?;
        out.write_all(b"\n").await.context("write output")?;
        written += 1;
    }
    out.flush().await.context("flush output")?;
    Ok(written)
}
