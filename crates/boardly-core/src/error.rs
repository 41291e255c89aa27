//! Error types for Boardly core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Boardly core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A location path could not be interpreted as an application route.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// A theme token is missing or malformed.
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Topbar or application configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
