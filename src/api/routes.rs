//! API Routes
//!
//! Configures the Axum router with all catalog server endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::cache::{cache_response, ResponseCacheLayer};

use super::handlers::{
    cache_stats, clear_product_cache, create_product, delete_product, get_product, health,
    list_products, patch_product, search_products, update_product, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/products` - List all products (cached)
/// - `GET /api/products/search?q=` - Search products (cached)
/// - `GET /api/products/:id` - Get product by id (cached)
/// - `POST /api/products` - Create a product
/// - `PUT /api/products/:id` - Replace a product
/// - `PATCH /api/products/:id` - Partially update a product
/// - `DELETE /api/products/:id` - Delete a product
/// - `POST /api/products/clear-cache` - Clear product cache entries
/// - `GET /api/cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Response cache: wraps the product routes; GETs are served from cache
///   (routes use full paths rather than nesting so the cache keys match the
///   request target exactly as the client sent it)
/// - CORS: allows any origin (configurable for production)
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Response cache over the product mount, with the configured TTL
    let cache_layer = middleware::from_fn_with_state(
        ResponseCacheLayer::new(state.cache.clone(), state.cache_ttl_ms),
        cache_response,
    );

    let product_routes = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/search", get(search_products))
        .route("/api/products/clear-cache", post(clear_product_cache))
        .route(
            "/api/products/:id",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .layer(cache_layer);

    let system_routes = Router::new()
        .route("/api/cache/stats", get(cache_stats))
        .route("/health", get(health));

    product_routes
        .merge(system_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
