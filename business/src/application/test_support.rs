//! Shared mockall doubles for use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Role, Session, User};
use crate::domain::auth::repository::{SessionRepository, UserRepository};
use crate::domain::auth::services::{ExternalIdentity, IdentityProviderService};
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::{Order, OrderItem};
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductFilter, ProductRepository};
use crate::domain::settings::model::StoreSettings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

// `mock!` cannot express the named lifetime `Option<&str>` needs under
// `#[async_trait]`, so the order repository mock comes from `automock`
// on the trait itself.
pub use crate::domain::order::repository::MockOrderRepository as MockOrderRepo;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl SessionRepository for SessionRepo {
        async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
        async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError>;
        async fn delete_by_token(&self, token: &str) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub SettingsRepo {}

    #[async_trait]
    impl SettingsRepository for SettingsRepo {
        async fn find(&self) -> Result<Option<StoreSettings>, RepositoryError>;
        async fn save(&self, settings: &StoreSettings) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub IdentityProvider {}

    #[async_trait]
    impl IdentityProviderService for IdentityProvider {
        async fn exchange(&self, external_session_id: &str) -> Result<ExternalIdentity, AuthError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn customer(id: &str) -> User {
    User::from_repository(
        UserId::new(id),
        format!("{id}@example.com"),
        "Test Customer".to_string(),
        None,
        Role::Customer,
        Utc::now(),
    )
}

pub fn admin(id: &str) -> User {
    User::from_repository(
        UserId::new(id),
        format!("{id}@lumina.co"),
        "Test Admin".to_string(),
        None,
        Role::Admin,
        Utc::now(),
    )
}

pub fn sample_order(user_id: Option<&str>, status: &str) -> Order {
    Order::from_repository(
        Uuid::new_v4(),
        user_id.map(UserId::new),
        "María Pérez".to_string(),
        "89953348".to_string(),
        "maria@example.com".to_string(),
        "San José".to_string(),
        vec![OrderItem {
            product_id: "prod-1".to_string(),
            name: "Anillo Solitario Diamante".to_string(),
            price: 2500.0,
            quantity: 1,
            image: "https://example.com/ring.jpg".to_string(),
        }],
        2500.0,
        String::new(),
        status.to_string(),
        Utc::now(),
    )
}

pub fn sample_product(name: &str) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        "Descripción".to_string(),
        100.0,
        "anillos".to_string(),
        vec!["https://example.com/p.jpg".to_string()],
        false,
        true,
        Utc::now(),
    )
}
