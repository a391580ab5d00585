use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Session, User};

pub struct AdminLoginParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    async fn execute(&self, params: AdminLoginParams) -> Result<(User, Session), AuthError>;
}
