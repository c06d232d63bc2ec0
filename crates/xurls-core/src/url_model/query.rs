//! Decoded query string: key → ordered list of values.

use std::borrow::Cow;
use std::collections::HashMap;

/// One key and every value it was given, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntry {
    pub key: String,
    pub values: Vec<String>,
}

/// Decoded query parameters with unique keys.
///
/// A repeated key extends the existing entry's value list instead of adding
/// a second entry. Entries are kept in first-occurrence order, but callers
/// must not rely on any particular key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<QueryEntry>,
    /// Key → position in `entries`.
    index: HashMap<String, usize>,
}

impl QueryMap {
    /// Build from already-decoded `(key, value)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut map = Self::default();
        for (key, value) in pairs {
            map.push(&key, value.into_owned());
        }
        map
    }

    /// Decode a raw `a=1&b=2` query string.
    pub fn parse(raw: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(raw.as_bytes()))
    }

    fn push(&mut self, key: &str, value: String) {
        if let Some(&pos) = self.index.get(key) {
            self.entries[pos].values.push(value);
            return;
        }
        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push(QueryEntry {
            key: key.to_string(),
            values: vec![value],
        });
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all keys.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|e| e.values.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collapse_into_one_entry() {
        let q = QueryMap::parse("x=1&x=2&y=3&x=1");
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("x").unwrap(), ["1", "2", "1"]);
        assert_eq!(q.get("y").unwrap(), ["3"]);
        assert_eq!(q.value_count(), 4);
    }

    #[test]
    fn values_are_decoded() {
        let q = QueryMap::parse("q=hello+world&path=%2Fetc%2Fpasswd");
        assert_eq!(q.get("q").unwrap(), ["hello world"]);
        assert_eq!(q.get("path").unwrap(), ["/etc/passwd"]);
    }

    #[test]
    fn key_without_value_has_empty_value() {
        let q = QueryMap::parse("debug&x=");
        assert_eq!(q.get("debug").unwrap(), [""]);
        assert_eq!(q.get("x").unwrap(), [""]);
    }

    #[test]
    fn many_distinct_keys_keep_first_occurrence_order() {
        let raw: Vec<String> = (0..20_000).map(|i| format!("k{i}={i}")).collect();
        let raw = format!("{}&k7=again", raw.join("&"));
        let q = QueryMap::parse(&raw);
        assert_eq!(q.len(), 20_000);
        assert_eq!(q.value_count(), 20_001);
        assert_eq!(q.keys().next(), Some("k0"));
        assert_eq!(q.keys().last(), Some("k19999"));
        assert_eq!(q.get("k7").unwrap(), ["7", "again"]);
        assert_eq!(q.get("k19999").unwrap(), ["19999"]);
        assert!(q.get("k20000").is_none());
    }

    #[test]
    fn empty_query() {
        let q = QueryMap::parse("");
        assert!(q.is_empty());
        assert_eq!(q.keys().count(), 0);
    }
}
