use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    /// Items are snapshots copied verbatim from the request; neither they
    /// nor the total are cross-checked against the catalog.
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        let order = Order::new(NewOrderProps {
            user_id: params.caller.map(|c| c.id),
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            customer_email: params.customer_email,
            customer_address: params.customer_address,
            items: params.items,
            total: params.total,
            notes: params.notes,
        });

        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order created: {} ({} items, total {})",
            order.id,
            order.items.len(),
            order.total
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockOrderRepo, customer, mock_logger};
    use crate::domain::order::model::{ORDER_STATUS_PENDING, OrderItem};
    use crate::domain::shared::value_objects::UserId;

    fn params(caller: Option<crate::domain::auth::model::User>) -> CreateOrderParams {
        CreateOrderParams {
            caller,
            customer_name: "María Pérez".to_string(),
            customer_phone: "89953348".to_string(),
            customer_email: "maria@example.com".to_string(),
            customer_address: "San José".to_string(),
            items: vec![OrderItem {
                product_id: "prod-1".to_string(),
                name: "Anillo Solitario Diamante".to_string(),
                price: 2500.0,
                quantity: 1,
                image: "https://example.com/ring.jpg".to_string(),
            }],
            total: 2500.0,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn should_stamp_owner_when_caller_present() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(params(Some(customer("user-1"))))
            .await
            .unwrap();

        assert_eq!(order.user_id, Some(UserId::new("user-1")));
        assert_eq!(order.status, ORDER_STATUS_PENDING);
    }

    #[tokio::test]
    async fn should_leave_owner_empty_for_anonymous_caller() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let order = use_case.execute(params(None)).await.unwrap();
        assert!(order.user_id.is_none());
    }

    #[tokio::test]
    async fn should_snapshot_items_verbatim() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_save()
            .withf(|o: &Order| o.items.len() == 1 && o.items[0].price == 2500.0 && o.total == 2500.0)
            .returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params(None)).await.is_ok());
    }
}
