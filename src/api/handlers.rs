//! API Handlers
//!
//! HTTP request handlers for the catalog endpoints. Every mutating handler
//! invalidates the product cache after its mutation succeeds and before the
//! response is returned; failed mutations never touch the cache.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::{invalidate_matching, shared_cache, SharedCache};
use crate::catalog::{Product, ProductCatalog};
use crate::error::{ApiError, Result};
use crate::models::{
    CacheClearResponse, CacheStatsResponse, CreateProductRequest, DeleteResponse, HealthResponse,
    PatchProductRequest, SearchQuery, UpdateProductRequest,
};

/// Substring shared by every cached product-route key.
const PRODUCT_KEY_PATTERN: &str = "product";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory product repository
    pub catalog: Arc<RwLock<ProductCatalog>>,
    /// Shared response cache
    pub cache: SharedCache,
    /// TTL for responses cached off the product routes
    pub cache_ttl_ms: u64,
}

impl AppState {
    /// Creates a new AppState with the given catalog.
    pub fn new(catalog: ProductCatalog, cache_ttl_ms: u64) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            cache: shared_cache(),
            cache_ttl_ms,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(ProductCatalog::new(), config.cache_ttl_ms)
    }
}

// == Read Handlers ==

/// Handler for GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list())
}

/// Handler for GET /api/products/search?q=...
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    Json(catalog.search(&query.q))
}

/// Handler for GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let catalog = state.catalog.read().await;
    let product = catalog.get(&id)?;
    Ok(Json(product))
}

// == Write Handlers ==

/// Handler for POST /api/products
///
/// Returns 201 with the created product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let product = {
        let mut catalog = state.catalog.write().await;
        catalog.create(req.into_product())?
    };

    // Mutation succeeded; purge stale product listings before replying
    let cleared = invalidate_matching(&state.cache, PRODUCT_KEY_PATTERN).await;
    info!("Product '{}' created, {} cache entries cleared", product.id, cleared);

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /api/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let product = {
        let mut catalog = state.catalog.write().await;
        catalog.replace(&id, req.into_product(id.clone()))?
    };

    let cleared = invalidate_matching(&state.cache, PRODUCT_KEY_PATTERN).await;
    info!("Product '{}' updated, {} cache entries cleared", product.id, cleared);

    Ok(Json(product))
}

/// Handler for PATCH /api/products/:id
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PatchProductRequest>,
) -> Result<Json<Product>> {
    let product = {
        let mut catalog = state.catalog.write().await;
        catalog.patch(&id, req.into_update())?
    };

    let cleared = invalidate_matching(&state.cache, PRODUCT_KEY_PATTERN).await;
    info!("Product '{}' patched, {} cache entries cleared", product.id, cleared);

    Ok(Json(product))
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    {
        let mut catalog = state.catalog.write().await;
        catalog.remove(&id)?;
    }

    let cleared = invalidate_matching(&state.cache, PRODUCT_KEY_PATTERN).await;
    info!("Product '{}' deleted, {} cache entries cleared", id, cleared);

    Ok(Json(DeleteResponse::new(id)))
}

// == Admin Handlers ==

/// Handler for POST /api/products/clear-cache
///
/// Clears product cache entries on demand and reports how many were removed.
pub async fn clear_product_cache(State(state): State<AppState>) -> Json<CacheClearResponse> {
    let cleared = invalidate_matching(&state.cache, PRODUCT_KEY_PATTERN).await;
    Json(CacheClearResponse::new(cleared))
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = {
        let store = state.cache.read().await;
        store.stats()
    };
    Json(CacheStatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let entries = {
        let store = state.cache.read().await;
        store.stats().entries
    };
    Json(HealthResponse::healthy(entries))
}
