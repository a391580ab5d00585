use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Sparse patch: only fields carrying `Some` are written; everything else
/// is left as stored.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_slug: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub in_stock: Option<bool>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
