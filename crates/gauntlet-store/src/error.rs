//! Error types for the record store

use gauntlet_core::RecordId;
use std::path::PathBuf;
use thiserror::Error;

/// Record store error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// Collection file does not exist yet
    #[error("Collection file not found: {0}")]
    NotFound(PathBuf),

    /// A record with this ID already exists in the collection
    #[error("Record ID {id} already exists in {collection}")]
    DuplicateId {
        /// Existing ID
        id: RecordId,
        /// Collection file name
        collection: String,
    },

    /// Blob could not be decoded; the file is corrupt or from an
    /// incompatible schema (re-run `init --force`)
    #[error("Corrupt collection file {path}: {detail}")]
    Corrupt {
        /// Offending file
        path: PathBuf,
        /// Decoder detail
        detail: String,
    },

    /// Blob could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem failure
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
