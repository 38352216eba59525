//! Error types for squadhub.
//!
//! This module defines all error types used throughout the squadhub crate.
//! Rendering itself never fails: malformed dates, unknown statuses and empty
//! tag lists degrade in place. Errors here come from loading configuration
//! and data, and from the outer surfaces (files, clipboard).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for squadhub operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Data Errors ===
    /// Failed to read or parse a dataset file.
    #[error("failed to load dataset from {path}: {source}")]
    DataLoad {
        /// Path to the dataset file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dataset record failed load-time validation.
    #[error("invalid dataset: {message}")]
    DataValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// No resource matched the requested title.
    #[error("no resource titled '{title}'")]
    UnknownResource {
        /// The title that was looked up.
        title: String,
    },

    // === Output Errors ===
    /// Failed to write rendered output.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        /// Destination path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The page on disk does not match a fresh render.
    #[error("{path} is out of date (expected digest {expected}, found {found})")]
    StaleOutput {
        /// Path of the checked page.
        path: PathBuf,
        /// Digest of the fresh render.
        expected: String,
        /// Digest of the file on disk.
        found: String,
    },

    // === Platform Errors ===
    /// The system clipboard rejected a write or is unavailable.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for squadhub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new clipboard error.
    #[must_use]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }

    /// Create a dataset validation error.
    #[must_use]
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a dataset load error for the given path.
    #[must_use]
    pub fn data_load(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DataLoad {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Check if this error reports a stale page.
    #[must_use]
    pub fn is_stale_output(&self) -> bool {
        matches!(self, Self::StaleOutput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::clipboard("permission denied");
        assert_eq!(err.to_string(), "clipboard error: permission denied");

        let err = Error::data_validation("bad progress");
        assert_eq!(err.to_string(), "invalid dataset: bad progress");
    }

    #[test]
    fn test_data_load_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::data_load("/tmp/data.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/data.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_unknown_resource_display() {
        let err = Error::UnknownResource {
            title: "Drill Manual".to_string(),
        };
        assert!(err.to_string().contains("Drill Manual"));
    }

    #[test]
    fn test_stale_output() {
        let err = Error::StaleOutput {
            path: PathBuf::from("index.html"),
            expected: "abc".to_string(),
            found: "def".to_string(),
        };
        assert!(err.is_stale_output());
        assert!(err.to_string().contains("index.html"));
        assert!(!Error::clipboard("x").is_stale_output());
    }

    #[test]
    fn test_output_write_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::OutputWrite {
            path: PathBuf::from("/root/forbidden/index.html"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden/index.html"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "title must not be empty".to_string(),
        };
        assert!(err.to_string().contains("title must not be empty"));
    }
}
