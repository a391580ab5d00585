use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category_slug: String,
    pub images: Json<Vec<String>>,
    pub featured: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price.to_f64().unwrap_or_default(),
            self.category_slug,
            self.images.0,
            self.featured,
            self.in_stock,
            self.created_at,
        )
    }
}
