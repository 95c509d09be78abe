//! Error types for litebind

use thiserror::Error;

/// Result type alias for litebind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during database operations
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite driver error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Lookup of a statement name that was never registered
    #[error("Statement not registered: {0}")]
    StatementNotFound(String),

    /// Operation on a connection after `close()`
    #[error("Connection is closed")]
    ConnectionClosed,

    /// Row decode error
    #[error("Failed to decode row: {0}")]
    RowDecode(String),
}
