//! URL discovery in free text.
//!
//! A single compiled regex scans each line; matches are non-overlapping and
//! returned left to right. Schemeless candidates (`www.example.com/x`) are
//! kept only when their final labels form a known public suffix, so that
//! `report.final` or `v1.2.3` are not reported.

mod pattern;

use psl::{List, Psl};
use regex::Regex;

use crate::config::{ConfigError, DiscoverSettings};

use pattern::PatternParts;

/// Characters never kept at the very end of a match.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\''];

#[derive(Debug, Clone)]
pub struct UrlExtractor {
    regex: Regex,
    check_suffix: bool,
}

/// Options for [`UrlExtractor`].
#[derive(Debug, Clone, Default)]
pub struct UrlExtractorBuilder {
    with_scheme: bool,
    scheme_pattern: Option<String>,
    with_host: bool,
    host_pattern: Option<String>,
}

impl UrlExtractorBuilder {
    /// Only match URLs with an explicit `scheme://`.
    pub fn with_scheme(mut self) -> Self {
        self.with_scheme = true;
        self
    }

    /// Scheme must match `pattern`; implies [`Self::with_scheme`].
    pub fn with_scheme_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.scheme_pattern = Some(pattern.into());
        self
    }

    /// Schemed URLs must carry a host (rejects `file:///etc/passwd`).
    pub fn with_host(mut self) -> Self {
        self.with_host = true;
        self
    }

    /// Host must match `pattern`; implies [`Self::with_host`].
    pub fn with_host_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.host_pattern = Some(pattern.into());
        self
    }

    pub fn build(self) -> Result<UrlExtractor, ConfigError> {
        if let Some(p) = &self.scheme_pattern {
            Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                what: "scheme",
                source,
            })?;
        }
        if let Some(p) = &self.host_pattern {
            Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                what: "host",
                source,
            })?;
        }

        let source = PatternParts {
            require_scheme: self.with_scheme,
            scheme: self.scheme_pattern.as_deref(),
            require_host: self.with_host,
            host: self.host_pattern.as_deref(),
        }
        .build();
        tracing::debug!(pattern = %source, "compiled discovery regex");

        let regex = Regex::new(&source).map_err(|source| ConfigError::InvalidPattern {
            what: "URL",
            source,
        })?;
        Ok(UrlExtractor {
            regex,
            check_suffix: self.host_pattern.is_none(),
        })
    }
}

impl UrlExtractor {
    pub fn builder() -> UrlExtractorBuilder {
        UrlExtractorBuilder::default()
    }

    /// Extractor configured from discovery settings.
    pub fn from_settings(settings: &DiscoverSettings) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if settings.with_scheme {
            builder = builder.with_scheme();
        }
        if let Some(p) = &settings.scheme_pattern {
            builder = builder.with_scheme_pattern(p.clone());
        }
        if settings.with_host {
            builder = builder.with_host();
        }
        if let Some(p) = &settings.host_pattern {
            builder = builder.with_host_pattern(p.clone());
        }
        builder.build()
    }

    /// Every URL-looking substring of `text`, left to right.
    pub fn extract_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut found = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if let Some(host) = caps.name("bare") {
                if self.check_suffix && !has_known_suffix(host.as_str()) {
                    continue;
                }
            }
            let url = trim_trailing(m.as_str());
            if !url.is_empty() {
                found.push(url);
            }
        }
        found
    }
}

fn has_known_suffix(host: &str) -> bool {
    if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return true;
    }
    let lower = host.to_ascii_lowercase();
    List.suffix(lower.as_bytes())
        .map(|s| s.is_known())
        .unwrap_or(false)
}

/// Drop sentence punctuation and unbalanced closing parentheses from the end.
///
/// Single backward pass; the paren balance is counted once up front.
fn trim_trailing(url: &str) -> &str {
    let mut balance = url.matches('(').count() as isize - url.matches(')').count() as isize;
    let mut end = url.len();
    for (idx, c) in url.char_indices().rev() {
        if TRAILING_PUNCTUATION.contains(&c) {
            end = idx;
        } else if c == ')' && balance < 0 {
            balance += 1;
            end = idx;
        } else {
            break;
        }
    }
    &url[..end]
}
