//! Generator error types
//!
//! Provider-side failures never surface here; they are absorbed by the model
//! chain. These variants cover configuration problems and caller misuse.

use shared::SharedError;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GeneratorError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }
}
