use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;

pub struct LogoutUseCaseImpl {
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.delete_by_token(token).await?;
        self.logger.debug("Session revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockSessionRepo, mock_logger};

    #[tokio::test]
    async fn should_be_idempotent_for_absent_token() {
        let mut sessions = MockSessionRepo::new();
        // Repository deletes are no-ops on missing rows.
        sessions.expect_delete_by_token().returning(|_| Ok(()));

        let use_case = LogoutUseCaseImpl {
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        assert!(use_case.execute("gone").await.is_ok());
        assert!(use_case.execute("gone").await.is_ok());
    }
}
