//! Set of values already emitted in this invocation.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Concurrent "seen" set with atomic check-and-insert.
///
/// Entries are never removed; the set lives for one invocation.
#[derive(Debug, Default)]
pub struct SeenSet {
    inner: Mutex<HashSet<String>>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` if absent. Returns true for the first caller only.
    pub fn insert(&self, value: &str) -> bool {
        let mut set = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if set.contains(value) {
            return false;
        }
        set.insert(value.to_string())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
