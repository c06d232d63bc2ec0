pub mod config;
pub mod logging;

pub mod discover;
pub mod dispatch;
pub mod dissect;
pub mod format;
pub mod ingest;
pub mod pipeline;
pub mod url_model;
