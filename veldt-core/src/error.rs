//! Error taxonomy.
//!
//! Cache and queue lookups report failure only as absence (`Option::None`);
//! errors here are reserved for configuration validation and boundary
//! surfaces that can genuinely fail.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all Veldt errors.
#[derive(Debug, Clone, Error)]
pub enum VeldtError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for Veldt operations.
pub type VeldtResult<T> = Result<T, VeldtError>;
