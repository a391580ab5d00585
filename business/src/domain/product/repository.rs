use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Exact-match listing filters; both optional and combinable.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_slug: Option<String>,
    pub featured: Option<bool>,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Returns `RepositoryError::NotFound` when no row matches the id.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
