//! Error types and handling for Ipsum Store core

use thiserror::Error;

pub use crate::router::RouterError;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Ipsum Store core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route table and router errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid configuration format: {message}")]
    InvalidFormat { message: String },
}
