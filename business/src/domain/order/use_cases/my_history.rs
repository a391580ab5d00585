use async_trait::async_trait;

use crate::domain::auth::model::User;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct MyOrderHistoryParams {
    pub caller: Option<User>,
}

#[async_trait]
pub trait MyOrderHistoryUseCase: Send + Sync {
    async fn execute(&self, params: MyOrderHistoryParams) -> Result<Vec<Order>, OrderError>;
}
