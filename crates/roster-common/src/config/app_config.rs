//! Application configuration structs
//!
//! Loads configuration from environment variables. The binary loads `.env`
//! into the process environment before anything here reads it.

use std::env;
use std::fmt;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub assets: AssetsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Read `APP_ENV`, falling back to development for unset or unknown values
    pub fn from_env() -> Self {
        env::var("APP_ENV")
            .ok()
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings, one field per `DB_*` variable
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

/// Static file serving configuration
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    /// Directory served under `/assets`
    pub dir: String,
}

// Default value functions
fn default_app_name() -> String {
    "roster-api".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DB_PORT` is missing or not a valid port, or if
    /// `API_PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: match lookup("API_PORT") {
                    Some(raw) => parse_port("API_PORT", &raw)?,
                    None => default_api_port(),
                },
            },
            database: DatabaseConfig {
                host: lookup("DB_HOST").unwrap_or_default(),
                port: lookup("DB_PORT")
                    .ok_or(ConfigError::MissingVar("DB_PORT"))
                    .and_then(|raw| parse_port("DB_PORT", &raw))?,
                user: lookup("DB_USER").unwrap_or_default(),
                password: lookup("DB_PASS").unwrap_or_default(),
                name: lookup("DB_NAME").unwrap_or_default(),
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            assets: AssetsConfig {
                dir: lookup("ASSETS_DIR").unwrap_or_else(default_assets_dir),
            },
        })
    }
}

/// Parse a TCP port, rejecting zero and anything that isn't a `u16`
fn parse_port(var: &'static str, raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidValue(var, raw.to_string())),
        Ok(port) => Ok(port),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}
