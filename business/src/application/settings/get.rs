use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::settings::model::StoreSettings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::get::GetSettingsUseCase;

pub struct GetSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSettingsUseCase for GetSettingsUseCaseImpl {
    async fn execute(&self) -> Result<StoreSettings, RepositoryError> {
        if let Some(settings) = self.repository.find().await? {
            return Ok(settings);
        }

        // First read: persist the defaults before returning them. Two
        // concurrent first reads race here; the singleton constraint in
        // the store keeps the record from forking.
        let defaults = StoreSettings::default();
        self.repository.save(&defaults).await?;
        self.logger.info("Store settings created with defaults");
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockSettingsRepo, mock_logger};

    #[tokio::test]
    async fn should_return_stored_settings_without_writing() {
        let mut mock_repo = MockSettingsRepo::new();
        mock_repo.expect_find().returning(|| {
            let mut settings = StoreSettings::default();
            settings.whatsapp_number = "70000000".to_string();
            Ok(Some(settings))
        });
        mock_repo.expect_save().never();

        let use_case = GetSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let settings = use_case.execute().await.unwrap();
        assert_eq!(settings.whatsapp_number, "70000000");
    }

    #[tokio::test]
    async fn should_create_defaults_on_first_read() {
        let mut mock_repo = MockSettingsRepo::new();
        mock_repo.expect_find().returning(|| Ok(None));
        mock_repo
            .expect_save()
            .withf(|s: &StoreSettings| *s == StoreSettings::default())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = GetSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let settings = use_case.execute().await.unwrap();
        assert_eq!(settings, StoreSettings::default());
    }
}
