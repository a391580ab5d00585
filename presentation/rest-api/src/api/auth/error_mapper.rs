use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AuthError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "auth.unauthenticated",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "InvalidCredentials",
                "auth.invalid_credentials",
            ),
            AuthError::ExchangeRejected => (
                StatusCode::UNAUTHORIZED,
                "ExchangeRejected",
                "auth.exchange_rejected",
            ),
            AuthError::ProviderUnreachable => (
                StatusCode::BAD_GATEWAY,
                "ProviderUnreachable",
                "auth.provider_unreachable",
            ),
            AuthError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
