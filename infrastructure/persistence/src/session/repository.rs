use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::auth::model::Session;
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::RepositoryError;

use super::entity::SessionEntity;

pub struct SessionRepositoryPostgres {
    pool: PgPool,
}

impl SessionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryPostgres {
    async fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO sessions (token, user_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (token) DO NOTHING"#,
        )
        .bind(&session.token)
        .bind(session.user_id.as_str())
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        let entity = sqlx::query_as::<_, SessionEntity>(
            "SELECT token, user_id, expires_at, created_at FROM sessions WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
