use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            category_slug: params.category_slug,
            images: params.images,
            featured: params.featured,
            in_stock: params.in_stock,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockProductRepo, mock_logger};

    fn params(name: &str, price: f64) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            description: "Anillo solitario con diamante".to_string(),
            price,
            category_slug: "anillos".to_string(),
            images: vec!["https://example.com/ring.jpg".to_string()],
            featured: true,
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params("Anillo Solitario Diamante", 2500.0))
            .await
            .unwrap();

        assert_eq!(product.name, "Anillo Solitario Diamante");
        assert!(product.featured);
    }

    #[tokio::test]
    async fn should_reject_negative_price_without_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Anillo", -10.0)).await;
        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }
}
