//! Expiring key-value store.
//!
//! The sole primitive shared by all inventory cache facets: a concurrent
//! map whose entries carry a per-entry time-to-live. Expired entries read
//! as absent; physical removal is lazy and never required for correctness.

use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A cached value paired with its absolute expiration deadline.
///
/// Logically destroyed the moment the deadline passes, regardless of when
/// it is physically removed.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// A zero TTL produces an entry that is born expired.
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Concurrent key-value store with per-entry TTL.
///
/// Safe for `set`/`try_get`/`add` from arbitrary threads. Expiry is checked
/// at read time against a monotonic clock; an optional [`purge_expired`]
/// sweep exists only for memory hygiene.
///
/// [`purge_expired`]: ExpiringCache::purge_expired
pub struct ExpiringCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
}

impl<K: Eq + Hash, V> std::fmt::Debug for ExpiringCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<K, V> Default for ExpiringCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`, resetting its expiration to
    /// now + `ttl`.
    pub fn set(&self, key: K, value: V, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    /// Insert only if no live entry exists for `key` (first-writer-wins).
    ///
    /// Returns `true` if the value was installed. An expired resident entry
    /// counts as absent. The check and the insert happen atomically under
    /// the map's shard lock, so two racing callers cannot both install.
    pub fn add(&self, key: K, value: V, ttl: Duration) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired() {
                    occupied.insert(CacheEntry::new(value, ttl));
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CacheEntry::new(value, ttl));
                true
            }
        }
    }

    /// Get the live value for `key`, or `None` if absent or expired.
    ///
    /// An expired entry is never surfaced; it is lazily evicted on the way
    /// out (re-checked under the shard lock, since a concurrent `set` may
    /// have replaced it with a live entry).
    pub fn try_get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        match self.entries.get(key) {
            None => None,
            Some(entry) => {
                if !entry.is_expired() {
                    return Some(entry.value.clone());
                }
                drop(entry);
                self.entries.remove_if(key, |_, e| e.is_expired());
                None
            }
        }
    }

    /// Remove the entry for `key`, returning its value if it was still live.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries
            .remove(key)
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(_, entry)| entry.value)
    }

    /// Evict all expired entries, returning how many were removed.
    ///
    /// Correctness never depends on this running; it exists so a periodic
    /// maintenance task can bound memory growth.
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let purged = before.saturating_sub(self.entries.len());
        if purged > 0 {
            tracing::trace!(purged, "evicted expired cache entries");
        }
        purged
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.is_expired())
            .count()
    }

    /// True if no live entries exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
