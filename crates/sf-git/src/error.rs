//! Error types for sf-git

use thiserror::Error;

/// Publisher errors
#[derive(Error, Debug)]
pub enum GitError {
    /// Missing credential (G001)
    #[error("[G001] Environment variable '{env}' is not set; it must hold the GitHub token")]
    MissingToken { env: String },

    /// API rejected the request (G002)
    #[error("[G002] GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Unexpected response shape (G003)
    #[error("[G003] Unexpected response from GitHub: {0}")]
    ResponseFormat(String),

    /// HTTP transport error (G004)
    #[error("[G004] HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for GitError
pub type GitResult<T> = Result<T, GitError>;
