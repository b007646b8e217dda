//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AssetsConfig, ConfigError, DatabaseConfig, Environment, ServerConfig,
};
