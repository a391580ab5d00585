use async_trait::async_trait;

use super::errors::AuthError;

/// Profile returned by the external identity provider in exchange for an
/// opaque external session id.
#[derive(Debug, Clone)]
pub struct ExternalIdentity {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Port to the third-party identity endpoint. Only the exchange contract
/// is modeled; everything else about the provider is out of scope.
#[async_trait]
pub trait IdentityProviderService: Send + Sync {
    /// Fails with `AuthError::ExchangeRejected` when the provider refuses
    /// the id, `AuthError::ProviderUnreachable` on transport failure.
    async fn exchange(&self, external_session_id: &str) -> Result<ExternalIdentity, AuthError>;
}
