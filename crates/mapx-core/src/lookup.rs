//! Keyed-source abstraction over lookup-by-key structures.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A read-only view over a key-to-value lookup structure.
///
/// `try_get` is the single lookup primitive: it combines the membership
/// test and the read, so adapters over concurrently mutated structures can
/// satisfy both under one lock acquisition. Presence means the key is in
/// the lookup, independent of the value itself.
pub trait KeyedSource<K, V> {
    /// Returns the value for `key`, or `None` when the key is absent.
    fn try_get(&self, key: &K) -> Option<V>;
}

impl<K: Eq + Hash, V: Clone> KeyedSource<K, V> for HashMap<K, V> {
    fn try_get(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<K: Ord, V: Clone> KeyedSource<K, V> for BTreeMap<K, V> {
    fn try_get(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

/// Concurrent-safe adapter: one read-lock acquisition covers both the
/// membership test and the read, so there is no check-then-read gap when
/// other threads mutate the map.
impl<K: Eq + Hash, V: Clone> KeyedSource<K, V> for RwLock<HashMap<K, V>> {
    fn try_get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }
}
