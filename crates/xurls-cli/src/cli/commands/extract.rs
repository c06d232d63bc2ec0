//! `xurls extract` – find URLs in free text.

use anyhow::Result;
use xurls_core::config::DiscoverSettings;
use xurls_core::discover::UrlExtractor;
use xurls_core::dispatch::{DiscoverProcessor, Dispatcher};
use xurls_core::ingest::{InputSources, LineCleaner};

use super::stdout::run_to_stdout;

pub async fn run_extract(settings: &DiscoverSettings, sources: InputSources) -> Result<()> {
    let extractor = UrlExtractor::from_settings(settings)?;
    let dispatcher = Dispatcher::new(
        DiscoverProcessor::new(extractor),
        settings.workers,
        settings.unique,
    );
    run_to_stdout(sources, LineCleaner::Discovery, &dispatcher, settings.queue_capacity).await
}
