use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::seed::fixture;
use crate::domain::seed::use_cases::run::{SeedDataUseCase, SeedOutcome};
use crate::domain::settings::repository::SettingsRepository;

/// Bootstrap on an empty store. The emptiness check and the inserts are
/// separate statements, so two concurrent seeds can race; the second one
/// then fails or duplicates, which is accepted for a manual bootstrap
/// endpoint.
pub struct SeedDataUseCaseImpl {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedDataUseCase for SeedDataUseCaseImpl {
    async fn execute(&self) -> Result<SeedOutcome, RepositoryError> {
        if self.categories.count().await? > 0 {
            self.logger.info("Seed skipped: store already seeded");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let categories = fixture::default_categories();
        for category in &categories {
            self.categories.save(category).await?;
        }

        let products = fixture::default_products();
        for product in &products {
            self.products.save(product).await?;
        }

        self.settings.save(&fixture::default_settings()).await?;

        self.logger.info(&format!(
            "Seeded {} categories and {} products",
            categories.len(),
            products.len()
        ));
        Ok(SeedOutcome::Seeded {
            categories: categories.len(),
            products: products.len(),
        })
    }
}
