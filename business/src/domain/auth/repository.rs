use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Session, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Upsert by id.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError>;
    /// Idempotent: deleting an absent token is not an error.
    async fn delete_by_token(&self, token: &str) -> Result<(), RepositoryError>;
}
