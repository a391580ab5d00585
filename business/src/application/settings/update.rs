use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::settings::model::StoreSettings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::update::UpdateSettingsUseCase;

pub struct UpdateSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSettingsUseCase for UpdateSettingsUseCaseImpl {
    async fn execute(&self, settings: StoreSettings) -> Result<StoreSettings, RepositoryError> {
        self.repository.save(&settings).await?;
        self.logger.info("Store settings replaced");
        Ok(settings)
    }
}
