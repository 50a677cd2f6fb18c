//! Application error types
//!
//! Errors raised while assembling and running the application, outside a single request.

use reqres_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
