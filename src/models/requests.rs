//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::catalog::{Product, ProductUpdate};

/// Request body for creating a product (POST /api/products)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// Unique product identifier (slug)
    pub id: String,
    /// Display name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Price in minor currency units
    pub price: u64,
    /// Top-level category
    pub category: String,
    /// Subcategory
    pub subcategory: String,
    /// Product type
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary image path
    #[serde(default)]
    pub image: String,
    /// Additional image paths
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Detail bullet points
    #[serde(default)]
    pub details: Vec<String>,
}

impl CreateProductRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.is_empty() {
            return Some("Product id cannot be empty".to_string());
        }
        if self.name.is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        None
    }

    /// Converts the request into a domain product.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            price: self.price,
            category: self.category,
            subcategory: self.subcategory,
            kind: self.kind,
            image: self.image,
            gallery: self.gallery,
            sizes: self.sizes,
            details: self.details,
        }
    }
}

/// Request body for a full product replacement (PUT /api/products/:id)
///
/// Same shape as creation minus the id, which comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub brand: String,
    pub price: u64,
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

impl UpdateProductRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        None
    }

    /// Converts the request into a domain product under the given id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            brand: self.brand,
            price: self.price,
            category: self.category,
            subcategory: self.subcategory,
            kind: self.kind,
            image: self.image,
            gallery: self.gallery,
            sizes: self.sizes,
            details: self.details,
        }
    }
}

/// Request body for a partial product update (PATCH /api/products/:id)
///
/// Every field is optional; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchProductRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub details: Option<Vec<String>>,
}

impl PatchProductRequest {
    /// Converts the request into a domain update.
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            brand: self.brand,
            price: self.price,
            category: self.category,
            subcategory: self.subcategory,
            kind: self.kind,
            image: self.image,
            gallery: self.gallery,
            sizes: self.sizes,
            details: self.details,
        }
    }
}

/// Query string for product search (GET /api/products/search?q=...)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Search term
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{
            "id": "casual-oxford-shirt",
            "name": "Casual Oxford Shirt",
            "brand": "Brooks Brothers",
            "price": 450000,
            "category": "Men",
            "subcategory": "Shirt",
            "type": "Casual shirt"
        }"#;
        let req: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, "casual-oxford-shirt");
        assert_eq!(req.kind, "Casual shirt");
        assert!(req.gallery.is_empty());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_create_request_empty_id() {
        let req = CreateProductRequest {
            id: String::new(),
            name: "Shirt".to_string(),
            brand: "Acme".to_string(),
            price: 100,
            category: "Men".to_string(),
            subcategory: "Shirt".to_string(),
            kind: "Casual".to_string(),
            image: String::new(),
            gallery: Vec::new(),
            sizes: Vec::new(),
            details: Vec::new(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_update_request_into_product_uses_path_id() {
        let json = r#"{
            "name": "Updated Shirt",
            "brand": "Acme",
            "price": 200000,
            "category": "Men",
            "subcategory": "Shirt",
            "type": "Casual shirt"
        }"#;
        let req: UpdateProductRequest = serde_json::from_str(json).unwrap();
        let product = req.into_product("oxford-shirt".to_string());
        assert_eq!(product.id, "oxford-shirt");
        assert_eq!(product.name, "Updated Shirt");
    }

    #[test]
    fn test_patch_request_partial() {
        let json = r#"{"price": 75000}"#;
        let req: PatchProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.price, Some(75_000));
        assert!(req.name.is_none());

        let update = req.into_update();
        assert_eq!(update.price, Some(75_000));
    }

    #[test]
    fn test_search_query_default() {
        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.q, "");
    }
}
