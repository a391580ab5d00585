use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::settings::model::StoreSettings;
use business::domain::settings::repository::SettingsRepository;

use super::entity::StoreSettingsEntity;

/// The table holds a single row pinned to id 1 by a CHECK constraint.
pub struct SettingsRepositoryPostgres {
    pool: PgPool,
}

impl SettingsRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn find(&self) -> Result<Option<StoreSettings>, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreSettingsEntity>(
            "SELECT store_name, location, whatsapp_number, bank_name, account_number, account_holder, cedula FROM store_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, settings: &StoreSettings) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO store_settings (id, store_name, location, whatsapp_number, bank_name, account_number, account_holder, cedula)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                store_name = EXCLUDED.store_name,
                location = EXCLUDED.location,
                whatsapp_number = EXCLUDED.whatsapp_number,
                bank_name = EXCLUDED.bank_name,
                account_number = EXCLUDED.account_number,
                account_holder = EXCLUDED.account_holder,
                cedula = EXCLUDED.cedula"#,
        )
        .bind(&settings.store_name)
        .bind(&settings.location)
        .bind(&settings.whatsapp_number)
        .bind(&settings.bank_info.bank_name)
        .bind(&settings.bank_info.account_number)
        .bind(&settings.bank_info.account_holder)
        .bind(&settings.bank_info.cedula)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
