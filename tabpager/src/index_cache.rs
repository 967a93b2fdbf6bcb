//! Access-ordered storage for realized content pages.
//!
//! ## Usage
//!
//! Hold resident pages keyed by index; the least recently touched entry is
//! always the next one to be evicted.

use std::hash::Hash;

use lru::LruCache;

/// An access-ordered mapping where insertion order doubles as recency order.
///
/// The cache never evicts on its own. Callers decide how many entries to keep
/// and drain the surplus with [`BoundedIndexCache::pop_oldest`].
pub struct BoundedIndexCache<K: Hash + Eq, V> {
    entries: LruCache<K, V>,
}

impl<K: Hash + Eq, V> BoundedIndexCache<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
        }
    }

    /// Looks up an entry without changing its recency.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.peek(key)
    }

    /// Inserts `value` at the most recently used end.
    ///
    /// An existing entry for `key` is overwritten and also moved to the most
    /// recently used end; the page cache uses [`touch`](Self::touch) for keys
    /// it already holds.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.put(key, value);
    }

    /// Moves an existing entry to the most recently used end.
    ///
    /// Does nothing if `key` is absent.
    pub fn touch(&mut self, key: &K) {
        self.entries.promote(key);
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        self.entries.pop_lru()
    }

    /// Empties the cache.
    ///
    /// Visual handles held by the values are dropped without being detached;
    /// callers detach them first.
    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates keys from the least to the most recently used.
    pub fn keys_oldest_first(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().rev().map(|(key, _)| key)
    }
}

impl<K: Hash + Eq, V> Default for BoundedIndexCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
