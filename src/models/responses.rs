//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies. Product payloads
//! serialize the domain model directly; these DTOs cover everything else.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for a product deletion (DELETE /api/products/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            message: format!("Product '{}' deleted successfully", id),
            id,
        }
    }
}

/// Response body for the admin cache clear (POST /api/products/clear-cache)
#[derive(Debug, Clone, Serialize)]
pub struct CacheClearResponse {
    /// Always true; failures surface as error responses
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Number of entries removed
    pub cleared_entries: usize,
}

impl CacheClearResponse {
    /// Creates a new CacheClearResponse for the given removal count
    pub fn new(cleared_entries: usize) -> Self {
        Self {
            success: true,
            message: format!(
                "Cache cleared successfully. {} entries removed.",
                cleared_entries
            ),
            cleared_entries,
        }
    }
}

/// Response body for cache statistics (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of live entries
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Keys of all live entries
    pub keys: Vec<String>,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            entries: stats.entries,
            hit_rate,
            keys: stats.keys,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g. "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Number of live cache entries
    pub cache_entries: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cache_entries: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache_entries,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new("oxford-shirt");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("oxford-shirt"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_cache_clear_response() {
        let resp = CacheClearResponse::new(3);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"cleared_entries\":3"));
        assert!(json.contains("3 entries removed"));
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            entries: 5,
            keys: vec!["/api/products".to_string()],
        };
        let resp = CacheStatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.entries, 5);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(2);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
        assert!(json.contains("\"cache_entries\":2"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
