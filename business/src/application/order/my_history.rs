use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::my_history::{MyOrderHistoryParams, MyOrderHistoryUseCase};

/// Newest-first cap on a caller's own history.
const HISTORY_LIMIT: i64 = 100;

pub struct MyOrderHistoryUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MyOrderHistoryUseCase for MyOrderHistoryUseCaseImpl {
    async fn execute(&self, params: MyOrderHistoryParams) -> Result<Vec<Order>, OrderError> {
        let caller = params.caller.ok_or(OrderError::Unauthenticated)?;

        let orders = self
            .repository
            .get_recent_by_user(&caller.id, HISTORY_LIMIT)
            .await?;

        self.logger.debug(&format!(
            "History: {} orders for {}",
            orders.len(),
            caller.id
        ));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockOrderRepo, customer, mock_logger, sample_order};
    use crate::domain::shared::value_objects::UserId;

    #[tokio::test]
    async fn should_fail_unauthenticated_for_anonymous_caller() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_recent_by_user().never();

        let use_case = MyOrderHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(MyOrderHistoryParams { caller: None }).await;
        assert!(matches!(result.unwrap_err(), OrderError::Unauthenticated));
    }

    #[tokio::test]
    async fn should_cap_history_at_one_hundred() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_recent_by_user()
            .withf(|user_id: &UserId, limit: &i64| user_id.as_str() == "user-1" && *limit == 100)
            .returning(|_, _| Ok(vec![sample_order(Some("user-1"), "pending")]));

        let use_case = MyOrderHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(MyOrderHistoryParams {
                caller: Some(customer("user-1")),
            })
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
    }
}
