//! Fixed projections over one parsed URL.
//!
//! Query-derived outputs follow the query map's key order, which callers
//! must treat as unspecified. Values under one key keep their input order.

use crate::url_model::ParsedUrl;

/// The hostname: `http://a.b.com/x` → `["a.b.com"]`.
pub fn domains(url: &ParsedUrl) -> Vec<String> {
    vec![url.host.clone()]
}

/// Second-level label plus public suffix, or nothing if either is unknown.
pub fn apexes(url: &ParsedUrl) -> Vec<String> {
    url.domain.apex().into_iter().collect()
}

pub fn paths(url: &ParsedUrl) -> Vec<String> {
    vec![url.path.clone()]
}

/// Every `key=value` pair, one element per value.
pub fn query_pairs(url: &ParsedUrl) -> Vec<String> {
    let mut pairs = Vec::with_capacity(url.query.value_count());
    for entry in url.query.iter() {
        for value in &entry.values {
            pairs.push(format!("{}={}", entry.key, value));
        }
    }
    pairs
}

/// Every distinct query key.
pub fn parameters(url: &ParsedUrl) -> Vec<String> {
    url.query.keys().map(str::to_string).collect()
}

/// Every query value, flattened across keys.
pub fn values(url: &ParsedUrl) -> Vec<String> {
    let mut values = Vec::with_capacity(url.query.value_count());
    for entry in url.query.iter() {
        values.extend(entry.values.iter().cloned());
    }
    values
}
