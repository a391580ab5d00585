use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::auth::model::{Role, User};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        // Unknown role strings demote to customer rather than fail the read.
        let role = self.role.parse().unwrap_or(Role::Customer);
        User::from_repository(
            UserId::new(self.id),
            self.email,
            self.name,
            self.picture,
            role,
            self.created_at,
        )
    }
}
