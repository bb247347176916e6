use std::io;

/// Errors that can occur while loading configuration or project metadata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Manifest error in {path}: {message}")]
    ManifestError { path: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for testscope operations
pub type Result<T> = std::result::Result<T, Error>;
