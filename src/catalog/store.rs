//! Product Catalog Store
//!
//! In-memory product repository backing the catalog API. Stands in for the
//! relational store: same CRUD surface, no persistence.

use std::collections::HashMap;

use crate::catalog::{Product, ProductUpdate};
use crate::error::{ApiError, Result};

// == Product Catalog ==
/// In-memory product storage keyed by product id.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    // == Constructor ==
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    // == List ==
    /// Returns all products, ordered by id for stable listings.
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    // == Search ==
    /// Case-insensitive substring search over name, brand and category.
    ///
    /// # Arguments
    /// * `query` - Search term
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        let mut matches: Vec<Product> = self
            .products
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }

    // == Get ==
    /// Retrieves a product by id.
    ///
    /// # Arguments
    /// * `id` - Product id
    pub fn get(&self, id: &str) -> Result<Product> {
        self.products
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Product not found: {}", id)))
    }

    // == Create ==
    /// Adds a new product; the id must not already exist.
    ///
    /// # Arguments
    /// * `product` - Product to add
    pub fn create(&mut self, product: Product) -> Result<Product> {
        if self.products.contains_key(&product.id) {
            return Err(ApiError::Conflict(format!(
                "Product already exists: {}",
                product.id
            )));
        }
        self.products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    // == Replace ==
    /// Replaces an existing product wholesale, keeping the path id.
    ///
    /// # Arguments
    /// * `id` - Product id from the request path
    /// * `product` - Replacement data
    pub fn replace(&mut self, id: &str, mut product: Product) -> Result<Product> {
        if !self.products.contains_key(id) {
            return Err(ApiError::NotFound(format!("Product not found: {}", id)));
        }
        product.id = id.to_string();
        self.products.insert(id.to_string(), product.clone());
        Ok(product)
    }

    // == Patch ==
    /// Applies a partial update to an existing product.
    ///
    /// # Arguments
    /// * `id` - Product id
    /// * `update` - Fields to change
    pub fn patch(&mut self, id: &str, update: ProductUpdate) -> Result<Product> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound(format!("Product not found: {}", id)))?;
        update.apply_to(product);
        Ok(product.clone())
    }

    // == Remove ==
    /// Removes a product, returning it.
    ///
    /// # Arguments
    /// * `id` - Product id
    pub fn remove(&mut self, id: &str) -> Result<Product> {
        self.products
            .remove(id)
            .ok_or_else(|| ApiError::NotFound(format!("Product not found: {}", id)))
    }

    // == Length ==
    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
