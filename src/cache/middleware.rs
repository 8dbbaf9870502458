//! Response Cache Middleware
//!
//! Axum layer that serves GET responses from the cache and captures misses.
//!
//! The request's verbatim path and raw query string form the cache key; no
//! normalization of parameter order, casing, or duplicates is performed, and
//! the key carries no client identity. On a hit the stored status and body
//! are replayed without running the inner handler. On a miss the inner
//! handler runs, its body is buffered, and only exact-200 responses are
//! stored. The layer never fails a request: any capture problem degrades to
//! skipping storage.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::cache::{CachedResponse, SharedCache};

// == Headers ==
/// Cache status header: `HIT` or `MISS`.
pub const X_CACHE_HEADER: &str = "x-cache";

/// On hits, the ISO-8601 instant the entry was stored.
pub const X_CACHE_TIME_HEADER: &str = "x-cache-time";

// == Layer State ==
/// Per-mount state for the response cache layer.
///
/// Each mount point gets its own TTL; the store is shared.
#[derive(Clone)]
pub struct ResponseCacheLayer {
    /// Shared cache store
    pub cache: SharedCache,
    /// TTL in milliseconds for entries captured by this mount
    pub ttl_ms: u64,
}

impl ResponseCacheLayer {
    /// Creates layer state for one mount point.
    ///
    /// # Arguments
    /// * `cache` - Shared cache store
    /// * `ttl_ms` - TTL in milliseconds for captured responses
    pub fn new(cache: SharedCache, ttl_ms: u64) -> Self {
        Self { cache, ttl_ms }
    }
}

// == Middleware ==
/// Caching middleware for read endpoints.
///
/// Only GET requests are eligible; all other methods pass through untouched
/// with no store access. Eligible misses perform exactly one store write;
/// hits and ineligible requests perform none.
pub async fn cache_response(
    State(layer): State<ResponseCacheLayer>,
    req: Request,
    next: Next,
) -> Response {
    // Only cache GET requests
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    // Cache key: full request target, path plus raw query string, verbatim
    let key = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let cached = {
        let mut store = layer.cache.write().await;
        store.get(&key)
    };

    if let Some(cached) = cached {
        debug!("Cache hit for {}", key);
        return hit_response(cached);
    }

    // Miss: run the inner handler and capture its output
    let response = next.run(req).await;

    // Only successful responses are ever stored; failures always re-execute
    if response.status() != StatusCode::OK {
        return tagged_miss(response);
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            // A body that cannot be buffered cannot be replayed either;
            // forward what remains and skip storage
            warn!("Skipping cache capture for {}: {}", key, err);
            return tagged_miss(Response::from_parts(parts, Body::empty()));
        }
    };

    {
        let mut store = layer.cache.write().await;
        store.set(
            key,
            CachedResponse::new(parts.status.as_u16(), bytes.clone()),
            layer.ttl_ms,
        );
    }

    tagged_miss(Response::from_parts(parts, Body::from(bytes)))
}

// == Response Builders ==
/// Builds the short-circuit reply for a cache hit.
fn hit_response(cached: CachedResponse) -> Response {
    let status = StatusCode::from_u16(cached.status).unwrap_or(StatusCode::OK);

    let mut response = Response::new(Body::from(cached.body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert("content-type", HeaderValue::from_static("application/json"));
    response
        .headers_mut()
        .insert(X_CACHE_HEADER, HeaderValue::from_static("HIT"));

    if let Some(stored) = DateTime::<Utc>::from_timestamp_millis(cached.stored_at as i64) {
        if let Ok(value) = HeaderValue::from_str(&stored.to_rfc3339()) {
            response.headers_mut().insert(X_CACHE_TIME_HEADER, value);
        }
    }

    response
}

/// Marks a response as not served from cache.
fn tagged_miss(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(X_CACHE_HEADER, HeaderValue::from_static("MISS"));
    response
}
