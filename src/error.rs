//! Error types for apiprogress operations.
//!
//! This module defines [`ProgressError`], the error type used throughout
//! the pipeline, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing is recovered internally: every variant aborts the run
//! - Use `ProgressError` for failures the driver reports distinctly
//! - Use `anyhow::Error` (via `ProgressError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for apiprogress operations.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The documentation server answered with a non-success status.
    #[error("Server returned {status} {reason} fetching {url}")]
    Fetch {
        url: String,
        status: u16,
        reason: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The documentation markup does not have the expected shape.
    #[error("{message} in HTML: {fragment}")]
    Parse { message: String, fragment: String },

    /// The catalog has no methods, so no percentage can be computed.
    #[error("Catalog contains no methods; cannot compute progress")]
    EmptyCatalog,

    /// The implemented-method list file does not exist.
    #[error("Implemented method list not found: {path}")]
    ImplementedListNotFound { path: PathBuf },

    /// No implemented-method list was given on the command line or in config.
    #[error("No implemented method list configured (use --implemented or set `implemented` in config)")]
    ImplementedListMissing,

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for apiprogress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;
