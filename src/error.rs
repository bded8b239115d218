//! Error types and handling for the `AgriDash` application

use thiserror::Error;

/// Main error type for the `AgriDash` application
#[derive(Error, Debug)]
pub enum AgriDashError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream provider communication errors
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl AgriDashError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AgriDashError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AgriDashError::Provider { .. } => {
                "Unable to reach upstream data providers. Please check your internet connection."
                    .to_string()
            }
            AgriDashError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AgriDashError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AgriDashError::General { message } => message.clone(),
        }
    }
}

/// Failure modes of a single dashboard data source.
///
/// Adapter failures never escape the aggregation cycle; they are converted
/// into slice-local fallbacks. `CapabilityUnavailable` only occurs during
/// geolocation and is always resolved to the fallback coordinate.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The provider did not answer within the per-call bound
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Non-2xx status or a payload missing a required field
    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    /// No way to obtain the data on this host (geolocation only)
    #[error("capability unavailable")]
    CapabilityUnavailable,
}

impl SourceError {
    /// Create an invalid-response error
    pub fn invalid<S: Into<String>>(reason: S) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}
