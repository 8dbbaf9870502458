//! Cache Module
//!
//! In-process response cache: TTL key/value store, HTTP caching middleware,
//! and bulk invalidation for write paths.

use std::sync::Arc;

use tokio::sync::RwLock;

mod entry;
mod invalidate;
mod middleware;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, CachedResponse};
pub use invalidate::{invalidate_all, invalidate_matching};
pub use middleware::{cache_response, ResponseCacheLayer, X_CACHE_HEADER, X_CACHE_TIME_HEADER};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Shared Handle ==
/// Thread-safe cache handle shared across request handlers and tasks.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Creates a fresh shared cache store.
pub fn shared_cache() -> SharedCache {
    Arc::new(RwLock::new(CacheStore::new()))
}

// == Public Constants ==
/// Default TTL for cached responses: 10 minutes.
pub const DEFAULT_TTL_MS: u64 = 600_000;

/// Interval between background cleanup sweeps: 5 minutes.
pub const SWEEP_INTERVAL_MS: u64 = 300_000;
