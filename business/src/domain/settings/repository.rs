use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::StoreSettings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The singleton record, if it has been created.
    async fn find(&self) -> Result<Option<StoreSettings>, RepositoryError>;
    /// Full-replace upsert of the singleton.
    async fn save(&self, settings: &StoreSettings) -> Result<(), RepositoryError>;
}
