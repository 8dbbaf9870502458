//! Cache Entry Module
//!
//! Defines the structure for individual cached responses with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;

// == Cached Response ==
/// A captured HTTP response: the status code and serialized body, plus the
/// instant it was stored (drives the `X-Cache-Time` header on hits).
#[derive(Debug, Clone)]
pub struct CachedResponse {
    /// HTTP status code of the captured response
    pub status: u16,
    /// Serialized response body
    pub body: Bytes,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CachedResponse {
    /// Creates a new CachedResponse stamped with the current time.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            body,
            stored_at: current_timestamp_ms(),
        }
    }
}

// == Cache Entry ==
/// Represents a single cache entry with payload and expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The captured response
    pub payload: CachedResponse,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` milliseconds from now.
    ///
    /// # Arguments
    /// * `payload` - The captured response to store
    /// * `ttl_ms` - TTL in milliseconds
    pub fn new(payload: CachedResponse, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            payload,
            created_at: now,
            expires_at: now + ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so once the TTL
    /// duration has fully elapsed the entry is immediately expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or 0 if the entry has expired.
    ///
    /// Useful for debugging and statistics purposes.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            0
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
