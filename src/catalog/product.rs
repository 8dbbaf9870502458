//! Product Model
//!
//! Domain model for catalog products.

use serde::{Deserialize, Serialize};

// == Product ==
/// A single catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (slug)
    pub id: String,
    /// Display name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Price in minor currency units
    pub price: u64,
    /// Top-level category (e.g. "Men")
    pub category: String,
    /// Subcategory (e.g. "Shirt")
    pub subcategory: String,
    /// Product type (e.g. "Casual shirt")
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

// == Product Update ==
/// Partial update applied to an existing product; None fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub kind: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub details: Option<Vec<String>>,
}

impl ProductUpdate {
    /// Applies the set fields onto `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            product.subcategory = subcategory;
        }
        if let Some(kind) = self.kind {
            product.kind = kind;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(gallery) = self.gallery {
            product.gallery = gallery;
        }
        if let Some(sizes) = self.sizes {
            product.sizes = sizes;
        }
        if let Some(details) = self.details {
            product.details = details;
        }
    }
}
