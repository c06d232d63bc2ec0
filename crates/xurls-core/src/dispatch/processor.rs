//! Per-item work done by a dispatcher worker.

use crate::config::DissectSettings;
use crate::discover::UrlExtractor;
use crate::dissect::Mode;
use crate::format::Template;
use crate::url_model::{ParseError, UrlParser};

/// Turns one raw input item into zero or more output values.
///
/// An `Err` is a per-item failure: the worker logs it and moves on.
pub trait Processor: Send + Sync + 'static {
    fn process(&self, raw: &str) -> Result<Vec<String>, ParseError>;
}

/// Parse a URL and project it through a [`Mode`].
#[derive(Debug, Clone)]
pub struct DissectProcessor {
    parser: UrlParser,
    mode: Mode,
    template: Template,
}

impl DissectProcessor {
    pub fn new(parser: UrlParser, mode: Mode, template: Template) -> Self {
        Self {
            parser,
            mode,
            template,
        }
    }

    pub fn from_settings(settings: &DissectSettings) -> Self {
        Self::new(
            UrlParser::new(settings.default_scheme.clone()),
            settings.mode,
            settings.template.clone(),
        )
    }
}

impl Processor for DissectProcessor {
    fn process(&self, raw: &str) -> Result<Vec<String>, ParseError> {
        let url = self.parser.parse(raw)?;
        Ok(self.mode.extract(&url, &self.template))
    }
}

/// Pull URLs out of a line of free text. Never fails.
#[derive(Debug, Clone)]
pub struct DiscoverProcessor {
    extractor: UrlExtractor,
}

impl DiscoverProcessor {
    pub fn new(extractor: UrlExtractor) -> Self {
        Self { extractor }
    }
}

impl Processor for DiscoverProcessor {
    fn process(&self, raw: &str) -> Result<Vec<String>, ParseError> {
        Ok(self
            .extractor
            .extract_all(raw)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}
