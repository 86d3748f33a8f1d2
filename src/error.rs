//! Error types for auth-schema-gen

use thiserror::Error;

/// Result type for schema generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for schema generation
#[derive(Error, Debug)]
pub enum Error {
    /// A field's declared type cannot be stored in any Astro DB column.
    /// This aborts the whole generation run; no partial document is returned.
    #[error("Invalid field type in model {0}")]
    InvalidFieldType(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convert Serde JSON errors to schema generation errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to schema generation errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}
