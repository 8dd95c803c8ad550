//! Error handling for depcheck-backends
//!
//! Wraps depcheck-core ExError with adapter-specific helpers

use depcheck_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Backend)
        .with_op("sql_select")
        .with_message(err.to_string())
}

/// Create a backend error from a reqwest failure
pub fn from_reqwest(backend: &str, err: reqwest::Error) -> ExError {
    // reqwest errors embed the URL; drop it so credentials in it never surface
    ExError::new(ExErrorKind::Backend)
        .with_op("http_request")
        .with_resource_key(backend.to_string())
        .with_message(err.without_url().to_string())
}

/// Create a backend error for a non-success HTTP status
pub fn http_status(backend: &str, status: reqwest::StatusCode, path: &str) -> ExError {
    ExError::new(ExErrorKind::Backend)
        .with_op("http_request")
        .with_resource_key(backend.to_string())
        .with_message(format!("GET {} returned {}", path, status))
}

/// Create a backend error for rows or payloads that do not have the expected shape
pub fn backend_data(op: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Backend)
        .with_op(op.to_string())
        .with_message(reason.into())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_resource_key(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a manifest parse error
pub fn manifest_parse(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Parse)
        .with_op("manifest_parse")
        .with_resource_key(path.display().to_string())
        .with_message(format!("{}: {}", path.display(), reason))
}

/// Create a missing configuration section/key error
pub fn config_missing(section: &str, key: Option<&str>) -> ExError {
    let message = match key {
        Some(key) => format!("Missing key '{}' in configuration section [{}]", key, section),
        None => format!("Missing configuration section [{}]", section),
    };
    ExError::new(ExErrorKind::Config)
        .with_op("config_lookup")
        .with_resource_key(section.to_string())
        .with_message(message)
}

/// Create an invalid configuration error
pub fn config_invalid(section: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("config_parse")
        .with_resource_key(section.to_string())
        .with_message(reason.into())
}
