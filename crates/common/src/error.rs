//! Error types shared across Monspan crates.

use std::path::PathBuf;

/// Top-level error type for Monspan operations.
#[derive(Debug, thiserror::Error)]
pub enum MonspanError {
    #[error("Topology error: {message}")]
    Topology { message: String },

    #[error("Selection error: {message}")]
    Selection { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Layout error: {message}")]
    Layout { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MonspanError.
pub type MonspanResult<T> = Result<T, MonspanError>;

impl MonspanError {
    pub fn topology(msg: impl Into<String>) -> Self {
        Self::Topology {
            message: msg.into(),
        }
    }

    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout {
            message: msg.into(),
        }
    }
}
