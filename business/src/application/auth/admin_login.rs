use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::allowlist::AdminDirectory;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Role, Session, User};
use crate::domain::auth::repository::{SessionRepository, UserRepository};
use crate::domain::auth::use_cases::admin_login::{AdminLoginParams, AdminLoginUseCase};
use crate::domain::logger::Logger;

pub struct AdminLoginUseCaseImpl {
    pub directory: AdminDirectory,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AdminLoginUseCase for AdminLoginUseCaseImpl {
    async fn execute(&self, params: AdminLoginParams) -> Result<(User, Session), AuthError> {
        let Some(account) = self.directory.verify(&params.email, &params.password) else {
            self.logger
                .warn(&format!("Rejected admin login for {}", params.email));
            return Err(AuthError::InvalidCredentials);
        };

        // Ensure a user record exists; an allowlisted email is always an
        // admin afterwards, even if an earlier federated login created it
        // as a customer.
        let user = match self.users.find_by_email(&account.email).await? {
            Some(mut existing) => {
                if existing.role != Role::Admin {
                    existing.role = Role::Admin;
                    self.users.save(&existing).await?;
                }
                existing
            }
            None => {
                let user = User::new(
                    account.email.clone(),
                    account.display_name.clone(),
                    None,
                    Role::Admin,
                );
                self.users.save(&user).await?;
                user
            }
        };

        let session = Session::new(user.id.clone());
        self.sessions.save(&session).await?;

        self.logger
            .info(&format!("Admin login: {} ({})", user.email, user.id));
        Ok((user, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockSessionRepo, MockUserRepo, customer, mock_logger,
    };
    use crate::domain::auth::allowlist::AdminAccount;
    use sha2::{Digest, Sha256};

    fn directory() -> AdminDirectory {
        AdminDirectory::new(vec![AdminAccount {
            email: "admin@lumina.co".to_string(),
            password_hash: format!("{:x}", Sha256::digest(b"lumina-secret")),
            display_name: "Lumina Admin".to_string(),
        }])
    }

    #[tokio::test]
    async fn should_create_admin_user_and_session_on_first_login() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|u: &User| u.role == Role::Admin && u.email == "admin@lumina.co")
            .returning(|_| Ok(()));
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().returning(|_| Ok(()));

        let use_case = AdminLoginUseCaseImpl {
            directory: directory(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let (user, session) = use_case
            .execute(AdminLoginParams {
                email: "admin@lumina.co".to_string(),
                password: "lumina-secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.role, Role::Admin);
        assert_eq!(session.user_id, user.id);
    }

    #[tokio::test]
    async fn should_promote_existing_customer_record() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().returning(|_| {
            let mut user = customer("user-1");
            user.email = "admin@lumina.co".to_string();
            Ok(Some(user))
        });
        users
            .expect_save()
            .withf(|u: &User| u.role == Role::Admin)
            .returning(|_| Ok(()));
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().returning(|_| Ok(()));

        let use_case = AdminLoginUseCaseImpl {
            directory: directory(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let (user, _) = use_case
            .execute(AdminLoginParams {
                email: "admin@lumina.co".to_string(),
                password: "lumina-secret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn should_reject_wrong_password_without_creating_session() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().never();
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().never();

        let use_case = AdminLoginUseCaseImpl {
            directory: directory(),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AdminLoginParams {
                email: "admin@lumina.co".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_unlisted_email() {
        let mut sessions = MockSessionRepo::new();
        sessions.expect_save().never();

        let use_case = AdminLoginUseCaseImpl {
            directory: directory(),
            users: Arc::new(MockUserRepo::new()),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AdminLoginParams {
                email: "intruder@example.com".to_string(),
                password: "lumina-secret".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }
}
