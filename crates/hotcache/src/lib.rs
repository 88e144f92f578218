//! # hotcache
//!
//! Bounded LRU cache with O(1) operations and built-in statistics.
//!
//! ## Architecture
//! - **HashMap**: AHash-keyed map from keys to list handles (O(1))
//! - **Ordered list**: arena-backed doubly-linked list carrying recency order (O(1))
//! - **Locking**: one `parking_lot::RwLock` around the whole cache
//!
//! Every access promotes the touched entry to most recently used; inserting
//! past capacity evicts the least recently used entry.

#![warn(missing_docs)]

mod cache;
mod list;
mod lru;
mod stats;

pub use cache::HotCache;
pub use stats::{CacheStats, StatsSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_surface_smoke() {
        let cache: HotCache<&str, i32> = HotCache::new(2);

        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"c"), Some(3));
        assert_eq!(cache.stats().snapshot().evictions, 1);
    }
}
