use std::env;

const DEFAULT_PROVIDER_URL: &str = "https://demobackend.emergentagent.com";

/// Configuration for the external identity provider.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub provider_url: String,
}

impl IdentityConfig {
    /// Environment variables:
    /// - IDENTITY_PROVIDER_URL: Base URL of the session exchange service
    pub fn from_env() -> Self {
        let provider_url =
            env::var("IDENTITY_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());
        Self { provider_url }
    }
}
