//! Error types for spam-rs

use thiserror::Error;

/// Result type alias for spam-rs operations
pub type Result<T> = std::result::Result<T, SpamError>;

/// Spam filter error types
#[derive(Error, Debug)]
pub enum SpamError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Training label other than ham or spam
    #[error("Invalid label '{0}': expected 'ham' or 'spam'")]
    InvalidLabel(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
