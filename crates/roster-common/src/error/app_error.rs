//! Application error types
//!
//! Errors raised while bootstrapping and serving the application.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    // Listener / serving errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Migration(_) => "MIGRATION_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    /// Create a database error from any displayable cause
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    /// Create a migration error from any displayable cause
    pub fn migration(err: impl std::fmt::Display) -> Self {
        Self::Migration(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::database("refused").error_code(), "DATABASE_ERROR");
        assert_eq!(AppError::migration("bad ddl").error_code(), "MIGRATION_ERROR");
        assert_eq!(
            AppError::from(ConfigError::MissingVar("DB_PORT")).error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::database("connection refused").to_string(),
            "Database error: connection refused"
        );
        assert_eq!(
            AppError::from(ConfigError::MissingVar("DB_PORT")).to_string(),
            "Missing required environment variable: DB_PORT"
        );
    }
}
