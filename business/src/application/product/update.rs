use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    /// Sparse patch: reads the stored product, overlays only the provided
    /// fields, writes it back. Read-then-write, so concurrent patches to
    /// the same product may interleave field-by-field.
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let name = params.name.unwrap_or(existing.name);
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        let price = params.price.unwrap_or(existing.price);
        if price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        let updated = Product::from_repository(
            existing.id,
            name,
            params.description.unwrap_or(existing.description),
            price,
            params.category_slug.unwrap_or(existing.category_slug),
            params.images.unwrap_or(existing.images),
            params.featured.unwrap_or(existing.featured),
            params.in_stock.unwrap_or(existing.in_stock),
            existing.created_at,
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockProductRepo, mock_logger, sample_product};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_patch_only_provided_fields() {
        let stored = sample_product("Test Product");
        let stored_id = stored.id;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo
            .expect_save()
            .withf(|p: &Product| {
                p.name == "Test Product" && p.price == 150.0 && p.featured && p.in_stock
            })
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id: stored_id,
                price: Some(150.0),
                featured: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Test Product");
        assert_eq!(updated.price, 150.0);
        assert!(updated.featured);
        assert_eq!(updated.category_slug, "anillos");
    }

    #[tokio::test]
    async fn should_keep_created_at_and_id() {
        let stored = sample_product("Test Product");
        let stored_id = stored.id;
        let stored_created_at = stored.created_at;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id: stored_id,
                name: Some("Renamed".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.id, stored_id);
        assert_eq!(updated.created_at, stored_created_at);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                price: Some(1.0),
                ..Default::default()
            })
            .await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_patched_negative_price() {
        let stored = sample_product("Test Product");
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                price: Some(-5.0),
                ..Default::default()
            })
            .await;
        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }
}
