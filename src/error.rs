//! Error types and handling for the Viajero planner

use thiserror::Error;

/// Main error type for the Viajero planner
#[derive(Error, Debug)]
pub enum ViajeroError {
    /// Configuration-related errors, including a missing credential
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors from the trip form
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Language model errors while writing the report
    #[error("Synthesis error: {message}")]
    Synthesis { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl ViajeroError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new synthesis error
    pub fn synthesis<S: Into<String>>(message: S) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether this should be shown as a warning rather than an error
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, ViajeroError::Config { .. })
    }

    /// Get a user-facing message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ViajeroError::Config { message } | ViajeroError::Validation { message } => {
                message.clone()
            }
            ViajeroError::Synthesis { message } => {
                format!("No se pudo generar el plan con el modelo de lenguaje: {message}")
            }
            ViajeroError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ViajeroError::config("missing API key");
        assert!(matches!(config_err, ViajeroError::Config { .. }));

        let synthesis_err = ViajeroError::synthesis("connection failed");
        assert!(matches!(synthesis_err, ViajeroError::Synthesis { .. }));

        let validation_err = ViajeroError::validation("bad dates");
        assert!(matches!(validation_err, ViajeroError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let validation_err = ViajeroError::validation("La fecha de fin debe ser posterior");
        assert_eq!(
            validation_err.user_message(),
            "La fecha de fin debe ser posterior"
        );

        let synthesis_err = ViajeroError::synthesis("HTTP 401");
        assert!(synthesis_err.user_message().contains("modelo de lenguaje"));
        assert!(synthesis_err.user_message().contains("HTTP 401"));
    }

    #[test]
    fn test_only_config_errors_are_warnings() {
        assert!(ViajeroError::config("no key").is_warning());
        assert!(!ViajeroError::validation("dates").is_warning());
        assert!(!ViajeroError::synthesis("down").is_warning());
    }
}
