//! Capacity-bounded associative cache.
//!
//! Every cached value in ordo-rs is a pure derivation of its key, so the
//! cache is a best-effort memoization layer: a miss triggers
//! recomputation, an eviction is harmless, and two racing writers would
//! write identical values. Correctness never depends on the eviction
//! policy, only on the size staying bounded while browsing many years.
//!
//! Eviction is oldest-insertion-first, which is close enough to LRU for
//! the access pattern here (a rendered year touches a contiguous block
//! of dates, then the user navigates to an adjacent year).

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;

/// Hit/miss/eviction counters for a [`BoundedCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups that found a value.
    pub hits: u64,
    /// Number of lookups that found nothing.
    pub misses: u64,
    /// Number of entries evicted to stay under capacity.
    pub evictions: u64,
}

struct Inner<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    stats: CacheStats,
}

/// A capacity-limited key/value cache with interior mutability.
///
/// A poisoned lock is treated as a cache miss rather than a panic: the
/// caller simply recomputes, which is always valid for pure derivations.
pub struct BoundedCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(Inner {
                map: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
                stats: CacheStats::default(),
            }),
            capacity,
        }
    }

    /// Look up `key`, cloning the stored value on a hit.
    pub fn get(&self, key: &K) -> Option<V> {
        let Ok(mut inner) = self.inner.lock() else {
            return None;
        };
        let found = inner.map.get(key).cloned();
        match found {
            Some(v) => {
                inner.stats.hits += 1;
                Some(v)
            }
            None => {
                inner.stats.misses += 1;
                None
            }
        }
    }

    /// Insert `value` under `key`, evicting the oldest entry if full.
    pub fn insert(&self, key: K, value: V) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if !inner.map.contains_key(&key) {
            while inner.map.len() >= self.capacity {
                match inner.order.pop_front() {
                    Some(oldest) => {
                        inner.map.remove(&oldest);
                        inner.stats.evictions += 1;
                    }
                    None => break,
                }
            }
            inner.order.push_back(key.clone());
        }
        inner.map.insert(key, value);
    }

    /// Look up `key`, computing and storing the value on a miss.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(v) = self.get(&key) {
            return v;
        }
        let v = compute();
        self.insert(key, v.clone());
        v
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.map.clear();
            inner.order.clear();
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.map.len()).unwrap_or(0)
    }

    /// Return `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.inner
            .lock()
            .map(|i| i.stats)
            .unwrap_or_default()
    }
}

impl<K, V> std::fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedCache")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_and_miss() {
        let cache: BoundedCache<u32, String> = BoundedCache::new(4);
        assert_eq!(cache.get(&1), None);
        cache.insert(1, "one".to_string());
        assert_eq!(cache.get(&1).as_deref(), Some("one"));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn eviction_keeps_size_bounded() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(3);
        for i in 0..10 {
            cache.insert(i, i * i);
        }
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats().evictions, 7);
        // Newest entries survive.
        assert_eq!(cache.get(&9), Some(81));
        assert_eq!(cache.get(&0), None);
    }

    #[test]
    fn reinsert_does_not_grow() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
        cache.insert(1, 1);
        cache.insert(1, 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&1), Some(2));
    }

    #[test]
    fn get_or_insert_computes_once() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
        let v1 = cache.get_or_insert_with(7, || 49);
        let v2 = cache.get_or_insert_with(7, || unreachable!("must be cached"));
        assert_eq!((v1, v2), (49, 49));
    }

    #[test]
    fn clear_empties() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
        cache.insert(1, 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_zero_clamps_to_one() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(0);
        cache.insert(1, 1);
        cache.insert(2, 2);
        assert_eq!(cache.len(), 1);
    }
}
