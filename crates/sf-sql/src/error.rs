//! Error types for sf-sql
//!
//! Reverse-parsing never errors — it degrades to empty results so callers
//! can fall back to manual entry. These errors belong to the optional
//! syntax check only.

use thiserror::Error;

/// SQL syntax-check errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// S001: Empty SQL
    #[error("[S001] SQL is empty")]
    EmptySql,

    /// S002: Syntax error reported by the parser
    #[error("[S002] SQL parse error: {message}")]
    ParseError { message: String },

    /// S003: DDL has no SELECT body to check
    #[error("[S003] No SELECT body found in DDL")]
    MissingSelectBody,
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
