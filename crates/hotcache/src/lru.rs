//! LRU (Least Recently Used) cache core
//!
//! Pairs a key map with the ordered list so lookup and eviction are both
//! O(1). Front of the list is most recently used, back is next to evict.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::list::{NodeId, OrderedList};

/// Key-value entry stored in the recency list
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// Not synchronized; `HotCache` wraps it in a lock for shared use.
pub struct LruCache<K, V> {
    map: HashMap<K, NodeId, RandomState>,
    list: OrderedList<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is valid and admits nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: OrderedList::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert or overwrite `key`, promoting it to most recently used.
    ///
    /// Returns `true` if the key was already present. Inserting a new key at
    /// capacity evicts the least recently used entry first.
    pub fn set(&mut self, key: K, value: V) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let was_present = if let Some(&id) = self.map.get(&key) {
            // Overwrite in place; cardinality is unchanged, so no eviction.
            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
            }
            self.list.move_to_front(id);
            true
        } else {
            if self.list.len() >= self.capacity {
                self.evict();
            }

            let id = self.list.push_front(Entry {
                key: key.clone(),
                value,
            });
            self.map.insert(key, id);
            false
        };

        #[cfg(debug_assertions)]
        self.validate_invariants();

        was_present
    }

    /// Look up `key`, promoting it to most recently used on a hit
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(&id) = self.map.get(key) {
            self.list.move_to_front(id);
            self.list.get(id).map(|entry| &entry.value)
        } else {
            None
        }
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry, keeping the capacity
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    fn evict(&mut self) {
        if let Some(id) = self.list.back_id() {
            if let Some(entry) = self.list.remove(id) {
                self.map.remove(&entry.key);
            }
        }
    }

    /// Checks map/list agreement. Only runs when debug assertions are enabled.
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(self.map.len(), self.list.len());
        for (key, &id) in &self.map {
            debug_assert!(
                self.list.get(id).is_some_and(|entry| entry.key == *key),
                "map handle does not resolve to its key"
            );
        }
        self.list.debug_validate();
    }
}
