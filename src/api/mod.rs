//! API Module
//!
//! HTTP handlers and routing for the catalog server REST API.
//!
//! # Endpoints
//! - `GET /api/products` - List all products (cached)
//! - `GET /api/products/search?q=` - Search products (cached)
//! - `GET /api/products/:id` - Get product by id (cached)
//! - `POST /api/products` - Create a product
//! - `PUT /api/products/:id` - Replace a product
//! - `PATCH /api/products/:id` - Partially update a product
//! - `DELETE /api/products/:id` - Delete a product
//! - `POST /api/products/clear-cache` - Clear product cache entries
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
