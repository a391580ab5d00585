use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::seed::use_cases::run::{SeedDataUseCase, SeedOutcome};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SeedResponse {
    pub message: String,
    pub categories: u32,
    pub products: u32,
}

pub struct SeedApi {
    seed_use_case: Arc<dyn SeedDataUseCase>,
}

impl SeedApi {
    pub fn new(seed_use_case: Arc<dyn SeedDataUseCase>) -> Self {
        Self { seed_use_case }
    }
}

/// Demo data bootstrap API
#[OpenApi]
impl SeedApi {
    /// Seed the catalog with demo data
    ///
    /// No-op when categories already exist. Public, matching the manual
    /// bootstrap flow of the storefront.
    #[oai(path = "/seed", method = "post", tag = "ApiTags::Seed")]
    async fn seed(&self) -> SeedApiResponse {
        match self.seed_use_case.execute().await {
            Ok(SeedOutcome::Seeded {
                categories,
                products,
            }) => SeedApiResponse::Ok(Json(SeedResponse {
                message: "Seeded".to_string(),
                categories: categories as u32,
                products: products as u32,
            })),
            Ok(SeedOutcome::AlreadySeeded) => SeedApiResponse::Ok(Json(SeedResponse {
                message: "Already seeded".to_string(),
                categories: 0,
                products: 0,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SeedApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SeedApiResponse {
    #[oai(status = 200)]
    Ok(Json<SeedResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
