//! Catalog Cache - product catalog API with an in-process response cache
//!
//! Serves a product CRUD API whose read endpoints are fronted by a TTL
//! response cache with write-triggered invalidation and background cleanup.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::CleanupTask;
