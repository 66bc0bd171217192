//! Error types for Multiverse Explorer

use thiserror::Error;

/// Main error type for Multiverse Explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Transport-level failure talking to the character API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The character API answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body could not be decoded into a character page
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted session store could not be opened
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using ExplorerError
pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExplorerError::Status {
            status: 404,
            url: "https://example.test/api/character".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unexpected status 404 from https://example.test/api/character"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ExplorerError = io_err.into();
        assert!(matches!(err, ExplorerError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ExplorerError = json_err.into();
        assert!(format!("{}", err).starts_with("Decode error:"));
    }
}
