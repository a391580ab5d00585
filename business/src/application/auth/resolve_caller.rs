use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::{SessionRepository, UserRepository};
use crate::domain::auth::use_cases::resolve_caller::ResolveCallerUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ResolveCallerUseCaseImpl {
    pub sessions: Arc<dyn SessionRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveCallerUseCase for ResolveCallerUseCaseImpl {
    async fn execute(&self, token: &str) -> Result<Option<User>, AuthError> {
        let Some(session) = self.sessions.find_by_token(token).await? else {
            return Ok(None);
        };

        // Expired rows stay in the store but count as no session at all.
        // Stored instants are UTC; compare against a UTC now.
        if session.is_expired(Utc::now()) {
            return Ok(None);
        }

        match self.users.get_by_id(&session.user_id).await {
            Ok(user) => Ok(Some(user)),
            // A session pointing at a deleted user is as good as no session.
            Err(RepositoryError::NotFound) => {
                self.logger.warn(&format!(
                    "Session for missing user {}",
                    session.user_id
                ));
                Ok(None)
            }
            Err(other) => Err(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockSessionRepo, MockUserRepo, customer, mock_logger,
    };
    use crate::domain::auth::model::Session;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Duration;

    fn use_case(
        sessions: MockSessionRepo,
        users: MockUserRepo,
    ) -> ResolveCallerUseCaseImpl {
        ResolveCallerUseCaseImpl {
            sessions: Arc::new(sessions),
            users: Arc::new(users),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_resolve_valid_session_to_user() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_by_token()
            .returning(|_| Ok(Some(Session::new(UserId::new("user-1")))));
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .returning(|_| Ok(customer("user-1")));

        let resolved = use_case(sessions, users).execute("tok").await.unwrap();
        assert_eq!(resolved.unwrap().id, UserId::new("user-1"));
    }

    #[tokio::test]
    async fn should_treat_unknown_token_as_anonymous() {
        let mut sessions = MockSessionRepo::new();
        sessions.expect_find_by_token().returning(|_| Ok(None));
        let mut users = MockUserRepo::new();
        users.expect_get_by_id().never();

        let resolved = use_case(sessions, users).execute("bogus").await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn should_treat_expired_session_as_anonymous() {
        let mut sessions = MockSessionRepo::new();
        sessions.expect_find_by_token().returning(|_| {
            let mut session = Session::new(UserId::new("user-1"));
            session.expires_at = Utc::now() - Duration::hours(1);
            Ok(Some(session))
        });
        let mut users = MockUserRepo::new();
        users.expect_get_by_id().never();

        let resolved = use_case(sessions, users).execute("stale").await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn should_treat_orphaned_session_as_anonymous() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_by_token()
            .returning(|_| Ok(Some(Session::new(UserId::new("ghost")))));
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let resolved = use_case(sessions, users).execute("tok").await.unwrap();
        assert!(resolved.is_none());
    }
}
