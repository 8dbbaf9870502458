//! Cache Statistics Module
//!
//! Point-in-time snapshot of cache state and performance counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache taken under the store lock.
///
/// `entries` and `keys` cover live (non-expired) entries only; entries past
/// their TTL that have not been physically removed yet are excluded. The
/// snapshot does not track later mutations of the store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of live entries at snapshot time
    pub entries: usize,
    /// Keys of all live entries at snapshot time
    pub keys: Vec<String>,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
