use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::settings::model::StoreSettings;

/// Get-or-create: a missing record is created with the store defaults and
/// returned. Concurrent first reads may race; the store's singleton
/// constraint keeps the record from forking.
#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<StoreSettings, RepositoryError>;
}
