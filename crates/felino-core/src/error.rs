//! Core error types for felino-core.
//!
//! Persistence and catalogue failures propagate to the caller
//! unchanged; the engine does not retry and does not silently swallow
//! them. The presentation layer decides the user-visible fallback.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for felino-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-layer errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Catalogue load errors
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),
}

/// Persistence-layer errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened or migrated
    #[error("store unavailable at {path}: {message}")]
    Unavailable { path: PathBuf, message: String },

    /// A single get/put failed
    #[error("store operation failed: {0}")]
    OperationFailed(String),
}

/// Catalogue load errors. Without a catalogue the selector cannot run,
/// and no plan is written for the date.
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// The catalogue document could not be read
    #[error("catalogue unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalogue document could not be parsed
    #[error("catalogue malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::OperationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::OperationFailed(format!("record encoding: {err}"))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
