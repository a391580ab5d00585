use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::auth::model::User;

#[derive(Debug, Clone, Object)]
pub struct FederatedLoginRequest {
    /// Opaque id handed to the frontend by the identity provider redirect
    pub session_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub picture: Option<String>,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            picture: user.picture,
            role: user.role.as_str().to_string(),
        }
    }
}

/// Login result: the user plus the issued token, for clients that prefer
/// the bearer carrier over the cookie.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub session_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct LogoutResponse {
    pub success: bool,
}
