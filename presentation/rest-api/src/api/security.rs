use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::{ApiKey, Bearer};

use business::domain::auth::model::{SESSION_TTL_DAYS, User};
use business::domain::auth::use_cases::resolve_caller::ResolveCallerUseCase;

/// Authenticated caller together with the credential it presented, so
/// logout can revoke the exact session.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user: User,
    pub token: String,
}

/// Session token carried in the `session_token` cookie.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "session_token",
    key_in = "cookie",
    checker = "cookie_checker"
)]
pub struct SessionCookieAuth(pub SessionIdentity);

/// Session token carried as a bearer credential.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", checker = "bearer_checker")]
pub struct SessionBearerAuth(pub SessionIdentity);

/// Both carriers hold the same opaque token; the cookie wins when a
/// request presents both.
#[derive(SecurityScheme)]
pub enum SessionAuth {
    Cookie(SessionCookieAuth),
    Bearer(SessionBearerAuth),
}

/// Same carriers as [`SessionAuth`] but tolerant of absent or invalid
/// credentials, for endpoints that are open to guests. poem-openapi does
/// not accept `Option<SessionAuth>` as a handler parameter; the fallback
/// variant is its mechanism for optional security schemes.
#[derive(SecurityScheme)]
pub enum OptionalSessionAuth {
    Cookie(SessionCookieAuth),
    Bearer(SessionBearerAuth),
    #[oai(fallback)]
    NoAuth,
}

impl OptionalSessionAuth {
    pub fn into_option(self) -> Option<SessionAuth> {
        match self {
            OptionalSessionAuth::Cookie(auth) => Some(SessionAuth::Cookie(auth)),
            OptionalSessionAuth::Bearer(auth) => Some(SessionAuth::Bearer(auth)),
            OptionalSessionAuth::NoAuth => None,
        }
    }
}

impl SessionAuth {
    pub fn identity(&self) -> &SessionIdentity {
        match self {
            SessionAuth::Cookie(SessionCookieAuth(identity)) => identity,
            SessionAuth::Bearer(SessionBearerAuth(identity)) => identity,
        }
    }

    pub fn user(&self) -> &User {
        &self.identity().user
    }

    pub fn token(&self) -> &str {
        &self.identity().token
    }
}

async fn resolve(req: &Request, token: &str) -> Option<SessionIdentity> {
    let resolver = req.data::<Arc<dyn ResolveCallerUseCase>>()?;
    match resolver.execute(token).await {
        Ok(Some(user)) => Some(SessionIdentity {
            user,
            token: token.to_string(),
        }),
        Ok(None) => None,
        Err(err) => {
            tracing::error!("Session resolution failed: {err}");
            None
        }
    }
}

async fn cookie_checker(req: &Request, api_key: ApiKey) -> Option<SessionIdentity> {
    resolve(req, &api_key.key).await
}

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<SessionIdentity> {
    resolve(req, &bearer.token).await
}

/// Set-Cookie value binding the session token for the session lifetime.
pub fn session_cookie(token: &str) -> String {
    let max_age = SESSION_TTL_DAYS * 24 * 60 * 60;
    format!("session_token={token}; Path=/; Max-Age={max_age}; HttpOnly; Secure; SameSite=None")
}

/// Set-Cookie value that drops the session cookie immediately.
pub fn clear_session_cookie() -> String {
    "session_token=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=None".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bind_cookie_for_seven_days() {
        let cookie = session_cookie("tok-1");
        assert!(cookie.starts_with("session_token=tok-1;"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=None"));
    }

    #[test]
    fn should_expire_cookie_on_clear() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
