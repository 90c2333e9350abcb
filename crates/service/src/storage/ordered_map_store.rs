use std::{collections::HashMap, hash::Hash};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

struct Entries<K, V> {
    map: HashMap<K, V>,
    order: Vec<K>,
}

/// Generic in-memory key-value store that remembers insertion order.
///
/// Lookups go through a `HashMap<K, V>`; a separate `Vec<K>` keeps the keys in
/// the order they were inserted so listing is stable. Both live behind a single
/// `RwLock`, so every mutation is serialized and readers never observe the two
/// halves out of step.
pub struct OrderedMapStore<K, V> {
    inner: RwLock<Entries<K, V>>,
}

impl<K, V> Default for OrderedMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self { Self::new() }
}

impl<K, V> OrderedMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self { inner: RwLock::new(Entries { map: HashMap::new(), order: Vec::new() }) }
    }

    /// List all values in insertion order.
    ///
    /// An order key without a map entry is reported as `ServiceError::Internal`.
    pub async fn list(&self) -> Result<Vec<V>, ServiceError> {
        let entries = self.inner.read().await;
        entries
            .order
            .iter()
            .map(|k| entries.map.get(k).cloned().ok_or_else(out_of_sync))
            .collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.inner.read().await;
        entries.map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.map.len()
    }

    /// Insert a value under a key that is not present yet.
    ///
    /// Returns `false` and leaves the store untouched when the key already exists.
    /// The existence check and the insert happen under the same write guard.
    pub async fn insert_new(&self, key: K, value: V) -> bool {
        let mut entries = self.inner.write().await;
        if entries.map.contains_key(&key) {
            return false;
        }
        entries.order.push(key.clone());
        entries.map.insert(key, value);
        true
    }

    /// Remove a key, keeping the relative order of the remaining entries.
    ///
    /// Returns `Ok(None)` when the key is absent. A key known to only one of the
    /// map and the order index is reported as `ServiceError::Internal`, and the
    /// store is left as it was.
    pub async fn remove(&self, key: &K) -> Result<Option<V>, ServiceError> {
        let mut entries = self.inner.write().await;
        let idx = entries.order.iter().position(|k| k == key);
        match (idx, entries.map.contains_key(key)) {
            (None, false) => Ok(None),
            (Some(idx), true) => {
                entries.order.remove(idx);
                Ok(entries.map.remove(key))
            }
            _ => Err(out_of_sync()),
        }
    }
}

fn out_of_sync() -> ServiceError {
    ServiceError::Internal("order index out of sync with entries".into())
}
