//! Error handling module for mediapick
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The only user-facing recoverable error (picking a file outside the allowed
//! extensions) is wizard state, not an error value; everything here is an
//! infrastructure failure that ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mediapick
#[derive(Error, Debug)]
pub enum MediaPickError {
    /// IO errors (terminal writes, directory reads outside the browser)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors (raw mode, alternate screen, drawing)
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The diagnostic log could not be opened or installed
    #[error("Cannot open log file {}: {reason}", .path.display())]
    Logging { path: PathBuf, reason: String },

    /// JSON serialization errors (final report)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mediapick operations
pub type Result<T> = std::result::Result<T, MediaPickError>;

impl MediaPickError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a logging error for the given log path
    pub fn logging(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Logging {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
