//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Tabula error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TabulaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input document errors (unparseable JSON, bad envelope)
    #[error("Input document error: {0}")]
    Input(String),

    /// Schema discovery / flattening errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// Anonymization errors
    #[error("Anonymization error: {0}")]
    Anonymization(String),

    /// Mapping store errors
    #[error("Mapping store error: {0}")]
    MappingStore(String),

    /// Delimited table read/write errors
    #[error("Table I/O error: {0}")]
    Table(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TabulaError {
    fn from(err: std::io::Error) -> Self {
        TabulaError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TabulaError {
    fn from(err: serde_json::Error) -> Self {
        TabulaError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for TabulaError {
    fn from(err: csv::Error) -> Self {
        TabulaError::Table(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TabulaError {
    fn from(err: toml::de::Error) -> Self {
        TabulaError::Configuration(format!("TOML parse error: {err}"))
    }
}
