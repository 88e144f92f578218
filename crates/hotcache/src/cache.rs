//! HotCache: lock-guarded bounded cache with statistics

use std::hash::Hash;

use parking_lot::RwLock;

use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Thread-safe bounded LRU cache.
///
/// A single coarse lock guards every operation; each critical section is
/// O(1). Share the cache between threads as `Arc<HotCache<K, V>>`.
pub struct HotCache<K, V> {
    /// Single-threaded core behind the lock
    inner: RwLock<LruCache<K, V>>,

    /// Hit/miss/insert/eviction counters
    stats: CacheStats,

    /// Cache capacity
    capacity: usize,
}

impl<K, V> HotCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; a capacity of zero admits
    ///   nothing
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(LruCache::new(capacity)),
            stats: CacheStats::new(),
            capacity,
        }
    }

    /// Insert or overwrite a key, making it the most recently used entry
    ///
    /// # Arguments
    /// * `key` - Lookup key
    /// * `value` - Value to store
    ///
    /// # Returns
    /// * `bool` - Whether the key was already present
    pub fn set(&self, key: K, value: V) -> bool {
        let mut inner = self.inner.write();
        let was_full = inner.len() == inner.capacity();
        let was_present = inner.set(key, value);

        if !was_present && self.capacity > 0 {
            self.stats.record_insert();
            if was_full {
                self.stats.record_eviction();
            }
        }

        was_present
    }

    /// Look up a key, promoting it to most recently used on a hit
    ///
    /// # Arguments
    /// * `key` - Lookup key
    ///
    /// # Returns
    /// * `Option<V>` - The cached value, cloned out of the cache
    pub fn get(&self, key: &K) -> Option<V> {
        // Promotion mutates the recency list, so reads take the write lock too.
        let mut inner = self.inner.write();
        if let Some(value) = inner.get(key) {
            self.stats.record_hit();
            Some(value.clone())
        } else {
            self.stats.record_miss();
            None
        }
    }

    /// Drop every entry and zero the statistics; capacity is unchanged
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.clear();
        self.stats.reset();
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
