//! Error types for studykit
//!
//! Every guarded edge case of the utility set surfaces here instead of
//! panicking inside the caller's view code.

use thiserror::Error;

/// Main error type for the studykit utilities
#[derive(Error, Debug)]
pub enum UtilError {
    /// Operation needs at least one character or element
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Locale tag not in the supported table
    #[error("Unknown locale '{0}' (expected 'th' or 'en')")]
    UnknownLocale(String),

    /// Value could not be read as a point in time
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Timer wrappers need a running tokio runtime
    #[error("No tokio runtime available: {0}")]
    NoRuntime(String),

    /// Collection input was not a JSON array of objects
    #[error("Invalid collection: {0}")]
    InvalidCollection(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for utility operations
pub type Result<T> = std::result::Result<T, UtilError>;

/// Convert anyhow errors to UtilError
impl From<anyhow::Error> for UtilError {
    fn from(err: anyhow::Error) -> Self {
        UtilError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UtilError::UnknownLocale("fr".to_string());
        assert!(err.to_string().contains("fr"));
        assert!(err.to_string().contains("'th'"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: UtilError = parse.unwrap_err().into();
        assert!(matches!(err, UtilError::Serialization(_)));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: UtilError = anyhow::anyhow!("bad config").into();
        assert!(err.to_string().contains("bad config"));
    }
}
