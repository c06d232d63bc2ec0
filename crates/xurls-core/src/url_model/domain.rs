//! Host decomposition into subdomain, second-level label and public suffix.

use psl::{List, Psl};
use std::net::IpAddr;

/// `sub.example.co.uk` → `{ subdomain: "sub", second_level: "example", top_level: "co.uk" }`.
///
/// Any field may be empty. When `second_level` and `top_level` are both set,
/// joining the non-empty parts with `.` reproduces the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    pub second_level: String,
    pub top_level: String,
}

impl DomainParts {
    /// Registrable domain (`example.co.uk`), if both labels are known.
    pub fn apex(&self) -> Option<String> {
        if self.second_level.is_empty() || self.top_level.is_empty() {
            return None;
        }
        Some(format!("{}.{}", self.second_level, self.top_level))
    }
}

/// Split `host` using the compiled Public Suffix List.
///
/// IP literals have no domain structure and yield empty parts. A host that is
/// itself a public suffix (`localhost`, `co.uk`) only fills `top_level`.
pub fn split_host(host: &str) -> DomainParts {
    let host = host.trim_end_matches('.');
    if host.is_empty() || host.parse::<IpAddr>().is_ok() {
        return DomainParts::default();
    }

    let suffix_len = match List.suffix(host.as_bytes()) {
        Some(suffix) => suffix.as_bytes().len(),
        None => return split_host_fallback(host),
    };

    if suffix_len >= host.len() {
        return DomainParts {
            top_level: host.to_string(),
            ..DomainParts::default()
        };
    }

    let boundary = host.len() - suffix_len;
    if !host.is_char_boundary(boundary) || host.as_bytes()[boundary - 1] != b'.' {
        return split_host_fallback(host);
    }

    let top_level = &host[boundary..];
    let rest = &host[..boundary - 1];
    let (subdomain, second_level) = rest.rsplit_once('.').unwrap_or(("", rest));

    DomainParts {
        subdomain: subdomain.to_string(),
        second_level: second_level.to_string(),
        top_level: top_level.to_string(),
    }
}

/// Rightmost label as TLD, the one before it as second level.
fn split_host_fallback(host: &str) -> DomainParts {
    let mut labels = host.rsplitn(3, '.');
    let top_level = labels.next().unwrap_or_default();
    let second_level = labels.next().unwrap_or_default();
    let subdomain = labels.next().unwrap_or_default();
    DomainParts {
        subdomain: subdomain.to_string(),
        second_level: second_level.to_string(),
        top_level: top_level.to_string(),
    }
}
