//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The requested start course could not be opened
    #[error("Cannot open course '{0}': {1}")]
    CourseUnavailable(String, String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
