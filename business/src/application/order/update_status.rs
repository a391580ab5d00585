use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

/// Sets an order's status in place. The REST layer gates this behind an
/// admin check before the use case runs; there is no ungated path.
pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<(), OrderError> {
        self.logger.info(&format!(
            "Updating order {} status to '{}'",
            params.id, params.status
        ));

        self.repository
            .update_status(params.id, &params.status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockOrderRepo, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_accept_any_status_string() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_update_status()
            .withf(|_, status: &str| status == "enviado con paloma mensajera")
            .returning(|_, _| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                status: "enviado con paloma mensajera".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_update_status()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                status: "shipped".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
