#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.unauthenticated")]
    Unauthenticated,
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.exchange_rejected")]
    ExchangeRejected,
    #[error("auth.provider_unreachable")]
    ProviderUnreachable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
