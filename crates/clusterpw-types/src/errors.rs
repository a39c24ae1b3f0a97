//! Error types for clusterpw operations.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for clusterpw operations.
///
/// Nothing in the provisioner retries or recovers: every variant aborts the
/// run and is reported once by the caller.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Secret lookup or naming error
    #[error("Secret error: {0}")]
    Secret(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Filesystem failure on a specific secret file or directory
    #[error("Failed to access {}: {source}", .path.display())]
    File {
        /// The file or directory being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl ProvisionError {
    /// Build a [`ProvisionError::File`] for the given path.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for clusterpw operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;
