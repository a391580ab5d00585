use async_trait::async_trait;

use crate::domain::auth::model::User;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderItem};

pub struct CreateOrderParams {
    /// Resolved caller, if the request carried a valid session.
    pub caller: Option<User>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub notes: String,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
