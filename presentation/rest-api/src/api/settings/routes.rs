use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::settings::use_cases::get::GetSettingsUseCase;
use business::domain::settings::use_cases::update::UpdateSettingsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse, forbidden_response};
use crate::api::security::SessionAuth;
use crate::api::settings::dto::StoreSettingsDto;
use crate::api::tags::ApiTags;

pub struct SettingsApi {
    get_use_case: Arc<dyn GetSettingsUseCase>,
    update_use_case: Arc<dyn UpdateSettingsUseCase>,
}

impl SettingsApi {
    pub fn new(
        get_use_case: Arc<dyn GetSettingsUseCase>,
        update_use_case: Arc<dyn UpdateSettingsUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
        }
    }
}

/// Store settings API
#[OpenApi]
impl SettingsApi {
    /// Fetch the store settings
    ///
    /// Public; the checkout page needs the bank details. The first read
    /// creates the record with defaults.
    #[oai(path = "/settings", method = "get", tag = "ApiTags::Settings")]
    async fn get_settings(&self) -> GetSettingsResponse {
        match self.get_use_case.execute().await {
            Ok(settings) => GetSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSettingsResponse::InternalError(json)
            }
        }
    }

    /// Replace the store settings
    ///
    /// Admin only. Full replacement, no field-level patching.
    #[oai(path = "/settings", method = "put", tag = "ApiTags::Settings")]
    async fn update_settings(
        &self,
        auth: SessionAuth,
        body: Json<StoreSettingsDto>,
    ) -> UpdateSettingsResponse {
        if !auth.user().is_admin() {
            return UpdateSettingsResponse::Forbidden(forbidden_response());
        }

        match self.update_use_case.execute(body.0.into()).await {
            Ok(settings) => UpdateSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateSettingsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<StoreSettingsDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<StoreSettingsDto>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
