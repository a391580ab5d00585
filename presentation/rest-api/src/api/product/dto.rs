use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    #[oai(default)]
    pub description: String,
    /// Price (must be zero or positive)
    pub price: f64,
    /// Slug of the category the product belongs to
    #[oai(default)]
    pub category_slug: String,
    /// Image URLs
    #[oai(default)]
    pub images: Vec<String>,
    /// Whether the product shows on the featured shelf
    #[oai(default)]
    pub featured: bool,
    /// Whether the product is available for purchase
    #[oai(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Sparse patch: absent fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category_slug: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub images: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub featured: Option<bool>,
    #[oai(skip_serializing_if_is_none)]
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_slug: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category_slug: product.category_slug,
            images: product.images,
            featured: product.featured,
            in_stock: product.in_stock,
            created_at: product.created_at,
        }
    }
}
