//! Error types for lightswitch.
//!
//! All fallible operations return `Result<T, SwitchError>` instead of
//! panicking. Invalid input is rejected before any computation starts.

use thiserror::Error;

use crate::engine::OnSwitchSet;

/// Result type alias for lightswitch operations.
pub type SwitchResult<T> = Result<T, SwitchError>;

/// Unified error type for all lightswitch operations.
#[derive(Debug, Error)]
pub enum SwitchError {
    // ===== Input Errors =====
    /// Input outside the domain of an operation (e.g. a negative switch count).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was rejected.
        message: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ===== Cross-check Errors =====
    /// Simulation and divisor analysis disagree.
    #[error("Cross-check failed for {n} switches: simulated {simulated}, analyzed {analyzed}")]
    CrossCheckMismatch {
        /// Switch count both algorithms ran with.
        n: usize,
        /// Result of the brute-force simulation.
        simulated: OnSwitchSet,
        /// Result of the divisor analysis.
        analyzed: OnSwitchSet,
    },
}

impl SwitchError {
    /// Create an invalid input error with a message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error was caused by the caller's input rather than
    /// by the environment or a failed cross-check.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::Config { .. } | Self::Validation(_)
        )
    }
}
