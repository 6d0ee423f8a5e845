//! Error types for prodadmin.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ApiError`] - Remote catalog failures (transport, rejection, undecodable body)
//!   - [`ExportError`] - CSV export failures
//!   - `ConfigError`, `LoggingError` - startup failures
//!   - `std::io::Error` - terminal failures
//! - [`ValidationError`] - Form input rejected before any network call
//!
//! # Recovery Strategy
//!
//! Api, validation and export errors are **non-fatal** inside the TUI: they are
//! reported in a notification and the engine state is left exactly as it was.
//! Only startup and terminal errors reach `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote catalog call failed.
    #[error("Remote catalog error: {0}")]
    Api(#[from] ApiError),

    /// CSV export failed.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures talking to the remote product service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure. No response was received.
    #[error("Connection error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    ///
    /// `body` holds the error payload, compacted when it is JSON.
    #[error("Request rejected ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error body returned by the service.
        body: String,
    },

    /// The service answered with success but the body could not be decoded.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the failure happened before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Required create/edit form input missing or malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is blank.
    #[error("Title is required")]
    MissingTitle,

    /// Price is blank.
    #[error("Price is required")]
    MissingPrice,

    /// Description is blank.
    #[error("Description is required")]
    MissingDescription,

    /// Price is not a finite, non-negative number.
    #[error("Price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),

    /// Category id was given but is not an integer.
    #[error("Category id must be an integer, got {0:?}")]
    InvalidCategoryId(String),
}

/// CSV export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The filtered set is empty; no file is written.
    #[error("Nothing to export")]
    NothingToExport,

    /// Writing the CSV file failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
