//! Error types for the dictionary codec.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dictionary operations.
pub type DictResult<T> = Result<T, DictError>;

/// Errors that can occur while reading, parsing, or writing dictionaries.
#[derive(Debug, Error)]
pub enum DictError {
    /// The file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An entry block did not follow the expected header layout.
    #[error("malformed entry: {0}")]
    MalformedEntry(String),
}
