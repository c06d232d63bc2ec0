//! Parse failure for a single input token.

use thiserror::Error;

/// Returned when a raw string is not a recoverable URL, even after the
/// default scheme has been applied. Non-fatal: the dispatcher logs and
/// skips the offending item.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid URL {input:?}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL has no host: {0:?}")]
    MissingHost(String),
}
