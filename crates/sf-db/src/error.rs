//! Error types for sf-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Object not found (D003)
    #[error("[D003] Object not found: {0}")]
    ObjectNotFound(String),

    /// Unexpected response shape (D004)
    #[error("[D004] Unexpected response from database: {0}")]
    ResponseFormat(String),

    /// Missing credential (D005)
    #[error("[D005] Environment variable '{env}' is not set; it must hold the bearer token")]
    MissingToken { env: String },

    /// HTTP transport error (D006)
    #[error("[D006] HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
