//! Journal error types
//!
//! Defines all errors that can occur in the journal core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted index exists but does not parse as the expected schema.
    /// Fatal to any operation requiring the index; never auto-repaired.
    #[error("Corrupt index at {path:?}: {error}")]
    IndexCorrupt { path: PathBuf, error: String },

    /// The index references a markdown file that is absent from disk.
    /// Fatal for the specific operation; does not corrupt the index.
    #[error("Entry file missing: {0:?}")]
    MissingEntryFile(PathBuf),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JournalError::MissingEntryFile(PathBuf::from("entries/2025/01/x.md"));
        assert!(err.to_string().contains("Entry file missing"));

        let err = JournalError::IndexCorrupt {
            path: PathBuf::from("index.json"),
            error: "expected value".to_string(),
        };
        assert!(err.to_string().contains("Corrupt index"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let journal_err: JournalError = io_err.into();
        assert!(matches!(journal_err, JournalError::Io(_)));
    }
}
