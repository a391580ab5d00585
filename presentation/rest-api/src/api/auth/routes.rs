use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::admin_login::{AdminLoginParams, AdminLoginUseCase};
use business::domain::auth::use_cases::federated_login::{
    FederatedLoginParams, FederatedLoginUseCase,
};
use business::domain::auth::use_cases::logout::LogoutUseCase;

use crate::api::auth::dto::{
    AdminLoginRequest, FederatedLoginRequest, LoginResponse, LogoutResponse, UserResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{
    OptionalSessionAuth, SessionAuth, clear_session_cookie, session_cookie,
};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    federated_login_use_case: Arc<dyn FederatedLoginUseCase>,
    admin_login_use_case: Arc<dyn AdminLoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
}

impl AuthApi {
    pub fn new(
        federated_login_use_case: Arc<dyn FederatedLoginUseCase>,
        admin_login_use_case: Arc<dyn AdminLoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
    ) -> Self {
        Self {
            federated_login_use_case,
            admin_login_use_case,
            logout_use_case,
        }
    }
}

/// Session and login API
#[OpenApi]
impl AuthApi {
    /// Exchange an identity provider session id for a local session
    ///
    /// The issued token is set as an HttpOnly cookie and echoed in the
    /// body for bearer clients.
    #[oai(path = "/auth/session", method = "post", tag = "ApiTags::Auth")]
    async fn federated_login(&self, body: Json<FederatedLoginRequest>) -> LoginApiResponse {
        let params = FederatedLoginParams {
            external_session_id: body.0.session_id,
        };

        match self.federated_login_use_case.execute(params).await {
            Ok((user, session)) => {
                let cookie = session_cookie(&session.token);
                LoginApiResponse::Ok(
                    Json(LoginResponse {
                        user: user.into(),
                        session_token: session.token,
                    }),
                    cookie,
                )
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginApiResponse::Unauthorized(json),
                    502 => LoginApiResponse::BadGateway(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with an allowlisted email and password
    #[oai(path = "/auth/admin-login", method = "post", tag = "ApiTags::Auth")]
    async fn admin_login(&self, body: Json<AdminLoginRequest>) -> LoginApiResponse {
        let params = AdminLoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.admin_login_use_case.execute(params).await {
            Ok((user, session)) => {
                let cookie = session_cookie(&session.token);
                LoginApiResponse::Ok(
                    Json(LoginResponse {
                        user: user.into(),
                        session_token: session.token,
                    }),
                    cookie,
                )
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginApiResponse::Unauthorized(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Current authenticated user
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self, auth: SessionAuth) -> Json<UserResponse> {
        Json(auth.user().clone().into())
    }

    /// Revoke the presented session
    ///
    /// Succeeds and clears the cookie even without a valid session.
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self, auth: OptionalSessionAuth) -> LogoutApiResponse {
        if let Some(auth) = auth.into_option()
            && let Err(err) = self.logout_use_case.execute(auth.token()).await
        {
            let (_status, json) = err.into_error_response();
            return LogoutApiResponse::InternalError(json);
        }

        LogoutApiResponse::Ok(Json(LogoutResponse { success: true }), clear_session_cookie())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(
        Json<LoginResponse>,
        #[oai(header = "Set-Cookie")] String,
    ),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutApiResponse {
    #[oai(status = 200)]
    Ok(
        Json<LogoutResponse>,
        #[oai(header = "Set-Cookie")] String,
    ),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
