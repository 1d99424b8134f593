//! Error types for annotation parsing.

use thiserror::Error;

/// Result type for annotation parsing.
pub type AnnotationResult<T> = Result<T, AnnotationError>;

/// Whole-document parse failures.
///
/// Malformed individual shots, frames or boxes never surface here; they are
/// dropped or degraded during parsing.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Annotation response contains no results")]
    MissingResults,

    #[error("Invalid annotation document: {0}")]
    InvalidDocument(String),
}

impl AnnotationError {
    /// Create an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument(message.into())
    }
}
