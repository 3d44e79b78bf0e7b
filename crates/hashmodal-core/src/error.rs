//! Errors for the fallible setup paths.
//!
//! Show, hide and the startup check never fail; only parsing configuration
//! and navigation state can.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while preparing a controller.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ModalError {
    /// Config JSON could not be parsed
    #[error("Config parse error: {message}")]
    ConfigParse {
        /// Description of the parse failure
        message: String,
    },

    /// Config parsed but holds an unusable value
    #[error("Config validation error for {field}: {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Navigation URL could not be parsed
    #[error("Invalid URL {url:?}: {message}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Parser message
        message: String,
    },
}

impl ModalError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ConfigParse { message: e.to_string() }
    }

    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig { field: field.to_string(), message: message.into() }
    }
}

/// Standard Result type using ModalError.
pub type Result<T> = std::result::Result<T, ModalError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModalError::invalid_config("active_class", "must not be empty");
        let msg = err.to_string();
        assert!(msg.contains("active_class"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ModalError::InvalidUrl { url: "::".to_string(), message: "bad".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidUrl"));

        let back: ModalError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
