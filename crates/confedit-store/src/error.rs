//! Error types for confedit-store

use std::path::PathBuf;
use thiserror::Error;

/// Store error taxonomy: absent file, filesystem failure, or a file
/// that exists but does not hold valid JSON.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("configuration file does not exist")]
    NotFound { path: PathBuf },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
