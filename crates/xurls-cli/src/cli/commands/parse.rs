//! `xurls parse` – print chosen components of each input URL.

use anyhow::Result;
use xurls_core::config::{DissectSettings, XurlsConfig};
use xurls_core::dispatch::{Dispatcher, DissectProcessor};
use xurls_core::ingest::{InputSources, LineCleaner};

use super::stdout::run_to_stdout;

/// Mode and template are validated before any input is read.
pub async fn run_parse(
    cfg: &XurlsConfig,
    mode: &str,
    format: Option<&str>,
    sources: InputSources,
) -> Result<()> {
    let settings = DissectSettings::new(mode, format, cfg)?;
    tracing::debug!(
        mode = %settings.mode,
        workers = settings.workers,
        unique = settings.unique,
        "parse"
    );

    let dispatcher = Dispatcher::new(
        DissectProcessor::from_settings(&settings),
        settings.workers,
        settings.unique,
    );
    run_to_stdout(sources, LineCleaner::Plain, &dispatcher, settings.queue_capacity).await
}
