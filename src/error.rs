//! Error types for pkgcheck operations.
//!
//! This module defines [`PkgcheckError`], the error type for everything that
//! can stop a run before packages are checked, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Per-package lookup failures never surface here; they are contained in
//!   [`crate::metadata::LookupError`] and turned into report entries
//! - Use `PkgcheckError` for configuration and startup failures
//! - Use `anyhow::Error` (via `PkgcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pkgcheck operations.
#[derive(Debug, Error)]
pub enum PkgcheckError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The Python interpreter could not be queried for its search path.
    #[error("Could not query interpreter '{interpreter}': {message}")]
    InterpreterFailed {
        interpreter: String,
        message: String,
    },

    /// Failed to serialize the report.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pkgcheck operations.
pub type Result<T> = std::result::Result<T, PkgcheckError>;
