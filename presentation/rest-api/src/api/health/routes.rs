use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// API banner response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BannerResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// API banner
    ///
    /// Identifies the service. Public.
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn banner(&self) -> Json<BannerResponse> {
        Json(BannerResponse {
            message: "Lumina & Co. Jewelry API".to_string(),
        })
    }

    /// Health check endpoint
    ///
    /// Returns the current status of the service. Public; suitable for
    /// container health checks and load balancer probes.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
