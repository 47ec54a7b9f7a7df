//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers and binaries.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    /// Load `config/default`, the optional `config/{app_env}` profile and
    /// `APP_*` environment overrides, in that order.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
