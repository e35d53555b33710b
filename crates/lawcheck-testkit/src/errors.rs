//! Driver error type
//!
//! Falsified checks are reported through [`crate::CheckStatus`]. These
//! variants only cover failures to configure the driver or compile the
//! structure in the first place.

use lawcheck_core::LawError;

/// Errors raised while configuring or running the law driver
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Configuration rejected by validation
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::DriverConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The structure could not be compiled into checks
    #[error(transparent)]
    Law(#[from] LawError),
}

impl DriverError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;
