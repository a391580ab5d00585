use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

/// Revokes the presented session. Idempotent: a missing or already-deleted
/// token is a successful no-op.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), AuthError>;
}
