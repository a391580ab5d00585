use business::domain::auth::allowlist::AdminDirectory;
use poem::middleware::Cors;

use super::{
    admin_config, cors_config, identity_config::IdentityConfig, server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub admin_directory: AdminDirectory,
    pub identity: IdentityConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            admin_directory: admin_config::init_admin_directory(),
            identity: IdentityConfig::from_env(),
        }
    }
}
