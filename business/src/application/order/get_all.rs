use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Vec<Order>, OrderError> {
        let status = params.status.as_deref();

        let Some(caller) = params.caller else {
            // Anonymous callers get an empty list, never an error.
            return Ok(Vec::new());
        };

        let orders = if caller.is_admin() {
            self.repository.get_all(status).await?
        } else {
            self.repository.get_by_user(&caller.id, status).await?
        };

        self.logger.debug(&format!(
            "Listed {} orders for {}",
            orders.len(),
            caller.id
        ));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockOrderRepo, admin, customer, mock_logger, sample_order,
    };
    use crate::domain::shared::value_objects::UserId;

    #[tokio::test]
    async fn should_return_empty_list_for_anonymous_caller() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_all().never();
        mock_repo.expect_get_by_user().never();

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetAllOrdersParams {
                caller: None,
                status: None,
            })
            .await
            .unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn should_return_all_orders_for_admin() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_all().returning(|_| {
            Ok(vec![
                sample_order(Some("user-1"), "pending"),
                sample_order(None, "shipped"),
            ])
        });

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetAllOrdersParams {
                caller: Some(admin("admin-1")),
                status: None,
            })
            .await
            .unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn should_scope_customer_to_own_orders() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_all().never();
        mock_repo
            .expect_get_by_user()
            .withf(|user_id: &UserId, _| user_id.as_str() == "user-1")
            .returning(|_, _| Ok(vec![sample_order(Some("user-1"), "pending")]));

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetAllOrdersParams {
                caller: Some(customer("user-1")),
                status: None,
            })
            .await
            .unwrap();

        assert!(
            orders
                .iter()
                .all(|o| o.user_id == Some(UserId::new("user-1")))
        );
    }

    #[tokio::test]
    async fn should_forward_status_filter() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|status: &Option<&str>| *status == Some("shipped"))
            .returning(|_| Ok(vec![sample_order(None, "shipped")]));

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetAllOrdersParams {
                caller: Some(admin("admin-1")),
                status: Some("shipped".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(orders[0].status, "shipped");
    }
}
