//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries, so keys
//! that are written once and never requested again still get evicted.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

// == Cleanup Task ==
/// Owned handle for the recurring cache sweep.
///
/// Spawned once at startup; `destroy` cancels the task and clears the store,
/// and is safe to call more than once. Dropping the handle aborts the task
/// as well, so no exit path leaks the timer. Once destroyed the task never
/// restarts.
#[derive(Debug)]
pub struct CleanupTask {
    /// Running sweep task; None once destroyed
    handle: Option<JoinHandle<()>>,
    /// Store to clear on destroy
    cache: SharedCache,
}

impl CleanupTask {
    // == Constructor ==
    /// Spawns the recurring sweep and returns its owning handle.
    ///
    /// The task loops forever: sleep for the interval, take the write lock,
    /// evict expired entries, log the result. The lock is held only for the
    /// duration of one sweep.
    ///
    /// # Arguments
    /// * `cache` - Shared cache to sweep
    /// * `interval_ms` - Milliseconds between sweeps
    pub fn spawn(cache: SharedCache, interval_ms: u64) -> Self {
        let interval = Duration::from_millis(interval_ms);
        let sweep_cache = cache.clone();

        let handle = tokio::spawn(async move {
            info!("Starting TTL cleanup task with interval of {} ms", interval_ms);

            loop {
                // Sleep for the configured interval
                tokio::time::sleep(interval).await;

                // Acquire write lock and evict expired entries
                let removed = {
                    let mut store = sweep_cache.write().await;
                    store.cleanup_expired()
                };

                if removed > 0 {
                    info!("TTL cleanup: removed {} expired entries", removed);
                } else {
                    debug!("TTL cleanup: no expired entries found");
                }
            }
        });

        Self {
            handle: Some(handle),
            cache,
        }
    }

    // == Destroy ==
    /// Cancels the sweep task and clears the store.
    ///
    /// Intended to run exactly once during graceful shutdown; repeated calls
    /// are no-ops.
    pub async fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            self.cache.write().await.clear();
            info!("Cleanup task stopped and cache cleared");
        }
    }

    // == Is Running ==
    /// Returns true until `destroy` has been called.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for CleanupTask {
    fn drop(&mut self) {
        // Abort covers exit paths that never reached destroy; the store is
        // torn down with the process in that case
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
