//! The map every store is built on.

use std::collections::HashMap;
use std::hash::Hash;

/// A keyed map of records, owned by one store.
#[derive(Debug, Clone)]
pub struct Table<K, R> {
    rows: HashMap<K, R>,
}

impl<K, R> Default for Table<K, R> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, R> Table<K, R> {
    /// Get a record.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&R> {
        self.rows.get(key)
    }

    /// Get a record for in-place mutation.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut R> {
        self.rows.get_mut(key)
    }

    /// Store a record, returning the one it replaced.
    pub fn put(&mut self, key: K, record: R) -> Option<R> {
        self.rows.insert(key, record)
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, key: &K) -> Option<R> {
        self.rows.remove(key)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.rows.contains_key(key)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<K: Eq + Hash, R> Extend<(K, R)> for Table<K, R> {
    fn extend<I: IntoIterator<Item = (K, R)>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}
