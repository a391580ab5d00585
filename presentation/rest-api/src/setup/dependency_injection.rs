use std::sync::Arc;

use identity::client::IdentityClient;
use identity::session_exchanger::SessionExchangerHttp;
use logger::tracing_logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::session::repository::SessionRepositoryPostgres;
use persistence::settings::repository::SettingsRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::auth::admin_login::AdminLoginUseCaseImpl;
use business::application::auth::federated_login::FederatedLoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::resolve_caller::ResolveCallerUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::my_history::MyOrderHistoryUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::seed::run::SeedDataUseCaseImpl;
use business::application::settings::get::GetSettingsUseCaseImpl;
use business::application::settings::update::UpdateSettingsUseCaseImpl;
use business::domain::auth::use_cases::resolve_caller::ResolveCallerUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub settings_api: crate::api::settings::routes::SettingsApi,
    pub seed_api: crate::api::seed::routes::SeedApi,
    /// Shared with the security layer through request data.
    pub resolve_caller: Arc<dyn ResolveCallerUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let session_repository = Arc::new(SessionRepositoryPostgres::new(pool.clone()));
        let settings_repository = Arc::new(SettingsRepositoryPostgres::new(pool));

        let identity_client = IdentityClient::new(config.identity.provider_url.clone());
        let identity_provider = Arc::new(SessionExchangerHttp::new(identity_client));

        // Auth use cases
        let resolve_caller: Arc<dyn ResolveCallerUseCase> = Arc::new(ResolveCallerUseCaseImpl {
            sessions: session_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });
        let federated_login_use_case = Arc::new(FederatedLoginUseCaseImpl {
            provider: identity_provider,
            directory: config.admin_directory.clone(),
            users: user_repository.clone(),
            sessions: session_repository.clone(),
            logger: logger.clone(),
        });
        let admin_login_use_case = Arc::new(AdminLoginUseCaseImpl {
            directory: config.admin_directory.clone(),
            users: user_repository,
            sessions: session_repository.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            sessions: session_repository,
            logger: logger.clone(),
        });

        // Category use cases
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let my_history_use_case = Arc::new(MyOrderHistoryUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Settings use cases
        let get_settings_use_case = Arc::new(GetSettingsUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let update_settings_use_case = Arc::new(UpdateSettingsUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });

        // Seed use case
        let seed_use_case = Arc::new(SeedDataUseCaseImpl {
            categories: category_repository,
            products: product_repository,
            settings: settings_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            federated_login_use_case,
            admin_login_use_case,
            logout_use_case,
        );
        let category_api = crate::api::category::routes::CategoryApi::new(
            create_category_use_case,
            get_all_categories_use_case,
            delete_category_use_case,
        );
        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(
            create_order_use_case,
            get_all_orders_use_case,
            my_history_use_case,
            update_order_status_use_case,
        );
        let settings_api = crate::api::settings::routes::SettingsApi::new(
            get_settings_use_case,
            update_settings_use_case,
        );
        let seed_api = crate::api::seed::routes::SeedApi::new(seed_use_case);

        Self {
            health_api,
            auth_api,
            category_api,
            product_api,
            order_api,
            settings_api,
            seed_api,
            resolve_caller,
        }
    }
}
