use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Result of the bootstrap run. Seeding twice is a success, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { categories: usize, products: usize },
    AlreadySeeded,
}

#[async_trait]
pub trait SeedDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedOutcome, RepositoryError>;
}
