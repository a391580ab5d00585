use async_trait::async_trait;

use crate::domain::auth::model::User;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct GetAllOrdersParams {
    pub caller: Option<User>,
    pub status: Option<String>,
}

/// Role-scoped listing: anonymous callers see nothing, admins see every
/// order, customers only their own.
#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Vec<Order>, OrderError>;
}
