use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Session, User};

pub struct FederatedLoginParams {
    /// Opaque id handed to the frontend by the identity provider redirect.
    pub external_session_id: String,
}

#[async_trait]
pub trait FederatedLoginUseCase: Send + Sync {
    async fn execute(&self, params: FederatedLoginParams) -> Result<(User, Session), AuthError>;
}
