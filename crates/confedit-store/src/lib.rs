//! JSON document storage for confedit
//!
//! One entity lives here: the configuration document, an arbitrary JSON
//! value persisted as the full contents of a single file. The store
//! never interprets the document; it is opaque payload. Reads and
//! writes are wholesale with no partial updates, no history and no
//! locking - the last writer wins.

pub mod error;

use serde_json::Value;
use std::path::{Path, PathBuf};

pub use error::{StoreError, StoreResult};

/// Store for the single JSON configuration document
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store for the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full document
    pub fn read(&self) -> StoreResult<Value> {
        if !self.path.exists() {
            return Err(StoreError::NotFound {
                path: self.path.clone(),
            });
        }

        let content = std::fs::read_to_string(&self.path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Serialize the document and overwrite the file in full
    ///
    /// Output is pretty-printed with two-space indentation; non-ASCII
    /// characters are written literally. Returns the resulting file
    /// size in bytes.
    pub fn write(&self, document: &Value) -> StoreResult<u64> {
        let mut text = serde_json::to_string_pretty(document)?;
        text.push('\n');
        std::fs::write(&self.path, text.as_bytes())?;
        Ok(text.len() as u64)
    }
}

// ==================== Tests ====================
