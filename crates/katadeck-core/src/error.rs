//! Error types for Katadeck

use thiserror::Error;

/// Main error type for Katadeck operations
#[derive(Error, Debug)]
pub enum DeckError {
    /// No challenge in the manifest matches the requested slug
    #[error("Challenge not found: {0}")]
    NotFound(String),

    /// A resource fetch completed with a non-success HTTP status
    #[error("Fetch of {path} failed with status {status}")]
    Status { path: String, status: u16 },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Manifest body could not be parsed
    #[error("Manifest parse error: {0}")]
    ManifestParse(#[from] serde_json::Error),

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
}

/// Result type alias using DeckError
pub type DeckResult<T> = Result<T, DeckError>;
