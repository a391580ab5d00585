use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::settings::model::StoreSettings;

#[async_trait]
pub trait UpdateSettingsUseCase: Send + Sync {
    async fn execute(&self, settings: StoreSettings) -> Result<StoreSettings, RepositoryError>;
}
