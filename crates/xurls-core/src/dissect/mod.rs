//! Dissection modes: which part of a parsed URL to emit.

mod components;

pub use components::{apexes, domains, parameters, paths, query_pairs, values};

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::format::Template;
use crate::url_model::ParsedUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hostname (`sub.example.com`).
    Domains,
    /// Apex domain (`example.com` from `sub.example.com`).
    Apexes,
    /// Request path (`/users`).
    Paths,
    /// `key=value` pairs from the query string.
    Query,
    /// Keys from the query string.
    Params,
    /// Values from the query string.
    Values,
    /// Custom directive template.
    Format,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Domains,
        Mode::Apexes,
        Mode::Paths,
        Mode::Query,
        Mode::Params,
        Mode::Values,
        Mode::Format,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Domains => "domains",
            Mode::Apexes => "apexes",
            Mode::Paths => "paths",
            Mode::Query => "query",
            Mode::Params => "params",
            Mode::Values => "values",
            Mode::Format => "format",
        }
    }

    /// Project `url`. `template` is only read in [`Mode::Format`].
    pub fn extract(self, url: &ParsedUrl, template: &Template) -> Vec<String> {
        match self {
            Mode::Domains => domains(url),
            Mode::Apexes => apexes(url),
            Mode::Paths => paths(url),
            Mode::Query => query_pairs(url),
            Mode::Params => parameters(url),
            Mode::Values => values(url),
            Mode::Format => template.render(url),
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
