//! Errors raised by the arrangement engine.

use monspan_common::MonspanError;

use crate::indices::IndexParseError;

/// Errors that can occur when building or querying an arrangement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrangementError {
    #[error("No displays reported")]
    EmptyTopology,

    #[error("Monitor position {index} is out of range ({count} monitors)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Result type alias using ArrangementError.
pub type ArrangementResult<T> = Result<T, ArrangementError>;

impl From<ArrangementError> for MonspanError {
    fn from(err: ArrangementError) -> Self {
        match err {
            ArrangementError::EmptyTopology => MonspanError::topology(err.to_string()),
            ArrangementError::IndexOutOfRange { .. } => MonspanError::selection(err.to_string()),
        }
    }
}

impl From<IndexParseError> for MonspanError {
    fn from(err: IndexParseError) -> Self {
        MonspanError::config(format!("invalid monitor selection: {err}"))
    }
}
