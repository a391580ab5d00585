use reqwest::Client;

/// Shared HTTP client configuration for the external identity provider.
pub struct IdentityClient {
    pub client: Client,
    pub base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the session exchange endpoint URL.
    pub fn session_data_url(&self) -> String {
        format!("{}/auth/v1/env/oauth/session-data", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_session_data_url_from_base() {
        let client = IdentityClient::new("https://id.example.com".to_string());
        assert_eq!(
            client.session_data_url(),
            "https://id.example.com/auth/v1/env/oauth/session-data"
        );
    }
}
