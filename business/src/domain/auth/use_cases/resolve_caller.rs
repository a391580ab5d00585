use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;

/// Resolves a presented session token to a user. `Ok(None)` covers unknown
/// and expired tokens alike; callers must not be able to tell the
/// difference from a missing credential.
#[async_trait]
pub trait ResolveCallerUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Option<User>, AuthError>;
}
