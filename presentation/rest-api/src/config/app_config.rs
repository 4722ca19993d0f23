use super::{cors_config, server_config::ServerConfig, shopping_list_config};
use business::domain::shopping_list::settings::ShoppingListSettings;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub shopping_list: ShoppingListSettings,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            shopping_list: shopping_list_config::from_env()?,
        })
    }
}
