use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

/// All listing methods return orders newest first (`created_at` descending).
///
/// Mocked with `automock` instead of `mock!` because the latter cannot
/// handle the named lifetime that `Option<&str>` requires alongside
/// `#[async_trait]`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn get_all<'a>(&self, status: Option<&'a str>) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_user<'a>(
        &self,
        user_id: &UserId,
        status: Option<&'a str>,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn get_recent_by_user(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Order>, RepositoryError>;
    /// Returns `RepositoryError::NotFound` when no row matches the id.
    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), RepositoryError>;
}
