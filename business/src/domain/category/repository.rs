use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
    /// Returns `RepositoryError::NotFound` when no row matches the id.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
