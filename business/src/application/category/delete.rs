use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        self.repository.delete(params.id).await.map_err(|e| match e {
            RepositoryError::NotFound => CategoryError::NotFound,
            other => CategoryError::Repository(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCategoryRepo, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_existing_category() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams { id: Uuid::new_v4() })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams { id: Uuid::new_v4() })
            .await;
        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }
}
