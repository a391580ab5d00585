use async_trait::async_trait;
use serde::Deserialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::services::{ExternalIdentity, IdentityProviderService};

use crate::client::IdentityClient;

/// Exchanges a provider session id for the authenticated profile over HTTP.
pub struct SessionExchangerHttp {
    client: IdentityClient,
}

impl SessionExchangerHttp {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SessionDataResponse {
    email: String,
    name: String,
    picture: Option<String>,
}

#[async_trait]
impl IdentityProviderService for SessionExchangerHttp {
    async fn exchange(&self, external_session_id: &str) -> Result<ExternalIdentity, AuthError> {
        let response = self
            .client
            .client
            .get(self.client.session_data_url())
            .header("X-Session-ID", external_session_id)
            .send()
            .await
            .map_err(|_| AuthError::ProviderUnreachable)?;

        if !response.status().is_success() {
            return Err(AuthError::ExchangeRejected);
        }

        let data: SessionDataResponse = response
            .json()
            .await
            .map_err(|_| AuthError::ExchangeRejected)?;

        Ok(ExternalIdentity {
            email: data.email,
            name: data.name,
            picture: data.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_profile_with_optional_picture() {
        let data: SessionDataResponse = serde_json::from_str(
            r#"{"id":"u-1","email":"jane@example.com","name":"Jane","session_token":"abc"}"#,
        )
        .unwrap();
        assert_eq!(data.email, "jane@example.com");
        assert_eq!(data.name, "Jane");
        assert!(data.picture.is_none());
    }
}
