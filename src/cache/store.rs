// Owned by the calling layer. Updates replace whole values per key; the
// core itself holds no shared mutable state.

use std::collections::HashMap;

use super::key::QueryKey;

/// Replace-on-key-match result store keyed by logical query identity.
#[derive(Debug)]
pub struct ResultCache<T> {
    entries: HashMap<QueryKey, T>,
}

impl<T> ResultCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key)
    }

    /// Insert, replacing any previous result for the same logical query.
    /// Returns the replaced result, if any.
    pub fn insert(&mut self, key: QueryKey, value: T) -> Option<T> {
        self.entries.insert(key, value)
    }

    pub fn remove(&mut self, key: &QueryKey) -> Option<T> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ResultCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
