//! Cache Invalidation Module
//!
//! Bulk removal of cached responses after data mutations, so stale listings
//! are never replayed once the underlying products change.

use tracing::info;

use crate::cache::SharedCache;

// == Invalidate Matching ==
/// Removes every cached entry whose key contains `pattern`.
///
/// Takes a snapshot of the current keys, filters it, then deletes each match
/// under the write lock. The two steps are not atomic with respect to
/// concurrent `set`s: a matching key written after the snapshot is taken
/// survives this pass and is only removed by a later invalidation or by its
/// own TTL.
///
/// Returns the number of entries removed.
///
/// # Arguments
/// * `cache` - Shared cache handle
/// * `pattern` - Substring to match against keys
pub async fn invalidate_matching(cache: &SharedCache, pattern: &str) -> usize {
    let matching: Vec<String> = {
        let store = cache.read().await;
        store
            .stats()
            .keys
            .into_iter()
            .filter(|key| key.contains(pattern))
            .collect()
    };

    let count = matching.len();

    if count > 0 {
        let mut store = cache.write().await;
        for key in &matching {
            store.delete(key);
        }
    }

    info!("Invalidated {} cache entries matching '{}'", count, pattern);
    count
}

// == Invalidate All ==
/// Unconditionally clears the entire cache.
///
/// # Arguments
/// * `cache` - Shared cache handle
pub async fn invalidate_all(cache: &SharedCache) {
    let mut store = cache.write().await;
    store.clear();
    info!("All cache entries cleared");
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStore, CachedResponse};
    use axum::body::Bytes;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn payload(body: &str) -> CachedResponse {
        CachedResponse::new(200, Bytes::copy_from_slice(body.as_bytes()))
    }

    fn shared_cache() -> SharedCache {
        Arc::new(RwLock::new(CacheStore::new()))
    }

    #[tokio::test]
    async fn test_invalidate_matching_removes_only_matches() {
        let cache = shared_cache();

        {
            let mut store = cache.write().await;
            store.set("/api/products".to_string(), payload("[]"), 60_000);
            store.set("/api/products/1".to_string(), payload("{}"), 60_000);
            store.set("/api/orders".to_string(), payload("[]"), 60_000);
        }

        let removed = invalidate_matching(&cache, "product").await;
        assert_eq!(removed, 2);

        let mut store = cache.write().await;
        assert!(store.get("/api/products").is_none());
        assert!(store.get("/api/products/1").is_none());
        assert!(store.get("/api/orders").is_some(), "non-matching key must survive");
    }

    #[tokio::test]
    async fn test_invalidate_matching_no_matches() {
        let cache = shared_cache();

        {
            let mut store = cache.write().await;
            store.set("/api/orders".to_string(), payload("[]"), 60_000);
        }

        let removed = invalidate_matching(&cache, "product").await;
        assert_eq!(removed, 0);
        assert_eq!(cache.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_matching_empty_cache() {
        let cache = shared_cache();

        let removed = invalidate_matching(&cache, "product").await;
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = shared_cache();

        {
            let mut store = cache.write().await;
            store.set("/api/products".to_string(), payload("[]"), 60_000);
            store.set("/api/orders".to_string(), payload("[]"), 60_000);
        }

        invalidate_all(&cache).await;

        let store = cache.read().await;
        assert!(store.is_empty());
        assert!(store.stats().keys.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_skips_expired_entries() {
        let cache = shared_cache();

        {
            let mut store = cache.write().await;
            store.set("/api/products".to_string(), payload("[]"), 100);
            store.set("/api/products/1".to_string(), payload("{}"), 60_000);
        }

        tokio::time::sleep(std::time::Duration::from_millis(150)).await;

        // The expired entry is logically absent, so only the live one counts
        let removed = invalidate_matching(&cache, "product").await;
        assert_eq!(removed, 1);
    }

    #[tokio::test]
    async fn test_concurrent_store_access_stays_consistent() {
        let cache = shared_cache();
        let mut handles = Vec::new();

        // Many tasks hammering set/get/delete on overlapping keys
        for i in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for j in 0..50 {
                    let key = format!("/api/products/{}", j % 10);
                    match (i + j) % 3 {
                        0 => {
                            let mut store = cache.write().await;
                            store.set(key, payload("{}"), 60_000);
                        }
                        1 => {
                            let mut store = cache.write().await;
                            let _ = store.get(&key);
                        }
                        _ => {
                            let mut store = cache.write().await;
                            store.delete(&key);
                        }
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        // The snapshot count must agree with what get actually finds
        let stats = {
            let store = cache.read().await;
            store.stats()
        };
        let mut found = 0;
        {
            let mut store = cache.write().await;
            for key in &stats.keys {
                if store.get(key).is_some() {
                    found += 1;
                }
            }
        }
        assert_eq!(stats.entries, found, "snapshot disagrees with live entries");
    }
}
