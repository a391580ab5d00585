use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::auth::model::Session;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct SessionEntity {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SessionEntity {
    pub fn into_domain(self) -> Session {
        Session::from_repository(
            UserId::new(self.user_id),
            self.token,
            self.expires_at,
            self.created_at,
        )
    }
}
