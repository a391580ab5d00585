use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::allowlist::AdminDirectory;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Role, Session, User};
use crate::domain::auth::repository::{SessionRepository, UserRepository};
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::federated_login::{
    FederatedLoginParams, FederatedLoginUseCase,
};
use crate::domain::logger::Logger;

pub struct FederatedLoginUseCaseImpl {
    pub provider: Arc<dyn IdentityProviderService>,
    pub directory: AdminDirectory,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FederatedLoginUseCase for FederatedLoginUseCaseImpl {
    async fn execute(&self, params: FederatedLoginParams) -> Result<(User, Session), AuthError> {
        let identity = self.provider.exchange(&params.external_session_id).await?;

        // Upsert: profile fields refresh on every login, the stored role
        // is preserved. Fresh records start as admin only when the email
        // sits on the allowlist.
        let user = match self.users.find_by_email(&identity.email).await? {
            Some(mut existing) => {
                existing.name = identity.name;
                existing.picture = identity.picture;
                self.users.save(&existing).await?;
                existing
            }
            None => {
                let role = if self.directory.contains(&identity.email) {
                    Role::Admin
                } else {
                    Role::Customer
                };
                let user = User::new(identity.email, identity.name, identity.picture, role);
                self.users.save(&user).await?;
                user
            }
        };

        let session = Session::new(user.id.clone());
        self.sessions.save(&session).await?;

        self.logger.info(&format!(
            "Federated login: {} as {}",
            user.email,
            user.role.as_str()
        ));
        Ok((user, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockIdentityProvider, MockSessionRepo, MockUserRepo, customer, mock_logger,
    };
    use crate::domain::auth::allowlist::AdminAccount;
    use crate::domain::auth::services::ExternalIdentity;

    fn provider_returning(email: &str) -> MockIdentityProvider {
        let email = email.to_string();
        let mut provider = MockIdentityProvider::new();
        provider.expect_exchange().returning(move |_| {
            Ok(ExternalIdentity {
                email: email.clone(),
                name: "Jane".to_string(),
                picture: Some("https://example.com/jane.png".to_string()),
            })
        });
        provider
    }

    fn allowlist() -> AdminDirectory {
        AdminDirectory::new(vec![AdminAccount {
            email: "admin@lumina.co".to_string(),
            password_hash: "irrelevant".to_string(),
            display_name: "Lumina Admin".to_string(),
        }])
    }

    #[tokio::test]
    async fn should_create_customer_for_unlisted_email() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|u: &User| u.role == Role::Customer && u.name == "Jane")
            .returning(|_| Ok(()));
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().returning(|_| Ok(()));

        let use_case = FederatedLoginUseCaseImpl {
            provider: Arc::new(provider_returning("jane@example.com")),
            directory: allowlist(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let (user, _) = use_case
            .execute(FederatedLoginParams {
                external_session_id: "ext-1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.role, Role::Customer);
    }

    #[tokio::test]
    async fn should_create_admin_for_allowlisted_email() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|u: &User| u.role == Role::Admin)
            .returning(|_| Ok(()));
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().returning(|_| Ok(()));

        let use_case = FederatedLoginUseCaseImpl {
            provider: Arc::new(provider_returning("admin@lumina.co")),
            directory: allowlist(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let (user, _) = use_case
            .execute(FederatedLoginParams {
                external_session_id: "ext-1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn should_refresh_profile_but_preserve_role_for_existing_user() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().returning(|_| {
            let mut user = customer("user-1");
            user.email = "jane@example.com".to_string();
            user.name = "Old Name".to_string();
            Ok(Some(user))
        });
        users
            .expect_save()
            .withf(|u: &User| u.role == Role::Customer && u.name == "Jane" && u.picture.is_some())
            .returning(|_| Ok(()));
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().returning(|_| Ok(()));

        let use_case = FederatedLoginUseCaseImpl {
            provider: Arc::new(provider_returning("jane@example.com")),
            directory: allowlist(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let (user, _) = use_case
            .execute(FederatedLoginParams {
                external_session_id: "ext-1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "Jane");
    }

    #[tokio::test]
    async fn should_propagate_rejected_exchange_without_touching_store() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_exchange()
            .returning(|_| Err(AuthError::ExchangeRejected));
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().never();
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().never();

        let use_case = FederatedLoginUseCaseImpl {
            provider: Arc::new(provider),
            directory: AdminDirectory::default(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FederatedLoginParams {
                external_session_id: "bad".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AuthError::ExchangeRejected));
    }
}
