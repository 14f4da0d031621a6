//! Error types for Corkboard.

use thiserror::Error;

/// Common error type for Corkboard.
#[derive(Error, Debug)]
pub enum CorkboardError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// A stored board document could not be encoded or decoded.
    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    ///
    /// The payload names the missing resource ("Thread", "Reply").
    #[error("{0} not found")]
    NotFound(String),

    /// The supplied delete password does not match the stored one.
    #[error("incorrect password")]
    WrongPassword,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CorkboardError {
    /// Shorthand for a missing thread.
    pub fn thread_not_found() -> Self {
        CorkboardError::NotFound("Thread".to_string())
    }

    /// Shorthand for a missing reply.
    pub fn reply_not_found() -> Self {
        CorkboardError::NotFound("Reply".to_string())
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for CorkboardError {
    fn from(e: sqlx::Error) -> Self {
        CorkboardError::Database(e.to_string())
    }
}

/// Result type alias for Corkboard operations.
pub type Result<T> = std::result::Result<T, CorkboardError>;
