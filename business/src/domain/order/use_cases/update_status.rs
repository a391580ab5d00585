use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;

pub struct UpdateOrderStatusParams {
    pub id: Uuid,
    /// Free-form; no allowed-values validation.
    pub status: String,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<(), OrderError>;
}
