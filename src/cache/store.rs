//! Cache Store Module
//!
//! Main cache engine: HashMap storage with per-entry TTL expiration.
//!
//! A miss (absent or expired key) is the normal path for callers, not an
//! error, so `get` returns `Option` rather than a `Result`. Entries past
//! their TTL are logically absent everywhere before they are physically
//! removed: `get` drops them lazily, `stats` excludes them, and the periodic
//! sweep evicts them eagerly.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, CachedResponse};

// == Cache Store ==
/// In-memory response cache with TTL expiration.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key to cached-response storage
    entries: HashMap<String, CacheEntry>,
    /// Number of successful lookups
    hits: u64,
    /// Number of failed lookups (absent or expired)
    misses: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a captured response under `key`, expiring `ttl_ms` from now.
    ///
    /// If the key already exists the entry is overwritten and its expiration
    /// is reset.
    ///
    /// # Arguments
    /// * `key` - The cache key (request path + raw query string)
    /// * `payload` - The captured response to store
    /// * `ttl_ms` - TTL in milliseconds
    pub fn set(&mut self, key: String, payload: CachedResponse, ttl_ms: u64) {
        let entry = CacheEntry::new(payload, ttl_ms);
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves a cached response by key.
    ///
    /// Expired entries are removed on the spot and reported as absent;
    /// callers cannot distinguish an expired key from one never set. Every
    /// lookup is counted as a hit or a miss.
    ///
    /// # Arguments
    /// * `key` - The cache key to look up
    pub fn get(&mut self, key: &str) -> Option<CachedResponse> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                // Lazy expiration: drop the stale entry on the way out
                self.entries.remove(key);
                self.misses += 1;
                return None;
            }

            let payload = entry.payload.clone();
            self.hits += 1;
            return Some(payload);
        }

        self.misses += 1;
        None
    }

    // == Delete ==
    /// Removes an entry by key. Idempotent: removing an absent key is a no-op.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of live entries and lookup counters.
    ///
    /// Entries past their TTL are excluded even if not yet physically
    /// removed. The snapshot is consistent at the moment it is taken; it is
    /// not a live view.
    pub fn stats(&self) -> CacheStats {
        let keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: keys.len(),
            keys,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        count
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use std::thread::sleep;
    use std::time::Duration;

    fn payload(body: &str) -> CachedResponse {
        CachedResponse::new(200, Bytes::copy_from_slice(body.as_bytes()))
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("[]"), 60_000);
        let cached = store.get("/api/products").unwrap();

        assert_eq!(cached.body.as_ref(), b"[]");
        assert_eq!(cached.status, 200);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();

        assert!(store.get("/api/products").is_none());
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("[]"), 60_000);
        store.delete("/api/products");

        assert!(store.is_empty());
        assert!(store.get("/api/products").is_none());
    }

    #[test]
    fn test_store_delete_nonexistent_is_noop() {
        let mut store = CacheStore::new();

        store.delete("/api/products");
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_overwrite_resets_expiration() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("v1"), 100);
        sleep(Duration::from_millis(60));

        // Overwrite with a fresh TTL before the first one lapses
        store.set("/api/products".to_string(), payload("v2"), 100);
        sleep(Duration::from_millis(60));

        // 120ms after the first set, only the reset TTL keeps it alive
        let cached = store.get("/api/products").unwrap();
        assert_eq!(cached.body.as_ref(), b"v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("[]"), 100);

        // Accessible immediately
        assert!(store.get("/api/products").is_some());

        // Wait for expiration
        sleep(Duration::from_millis(150));

        // Expired entries look exactly like absent ones
        assert!(store.get("/api/products").is_none());
        assert_eq!(store.len(), 0, "expired entry should be removed on get");
    }

    #[test]
    fn test_store_expired_absent_from_stats() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("[]"), 100);
        store.set("/api/products/1".to_string(), payload("{}"), 60_000);

        sleep(Duration::from_millis(150));

        // The expired key is still physically present but logically absent
        let stats = store.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.keys, vec!["/api/products/1".to_string()]);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("[]"), 60_000);
        store.set("/api/products/1".to_string(), payload("{}"), 60_000);

        store.clear();

        assert!(store.is_empty());
        assert!(store.stats().keys.is_empty());
    }

    #[test]
    fn test_store_stats_counters() {
        let mut store = CacheStore::new();

        store.set("/api/products".to_string(), payload("[]"), 60_000);
        store.get("/api/products"); // hit
        store.get("/api/orders"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new();

        store.set("/api/products?page=1".to_string(), payload("[]"), 100);
        store.set("/api/products?page=2".to_string(), payload("[]"), 60_000);

        // Wait for the first entry to expire
        sleep(Duration::from_millis(150));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("/api/products?page=2").is_some());
    }
}
