use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategoryProps};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.slug));

        let category = Category::new(NewCategoryProps {
            name: params.name,
            slug: params.slug,
            image: params.image,
            description: params.description,
        })?;

        self.repository.save(&category).await?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_create_category_when_valid() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Anillos".to_string(),
                slug: "anillos".to_string(),
                image: "https://example.com/anillos.jpg".to_string(),
                description: "Elegantes anillos".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().slug, "anillos");
    }

    #[tokio::test]
    async fn should_reject_empty_slug_without_saving() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Anillos".to_string(),
                slug: "  ".to_string(),
                image: String::new(),
                description: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::SlugEmpty));
    }
}
