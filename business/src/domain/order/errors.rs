#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("auth.unauthenticated")]
    Unauthenticated,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
