//! Error types for receipt generation

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Receipt generation error types
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The PDF library failed while laying out or emitting the document
    #[error("document rendering failed: {0}")]
    Render(#[from] printpdf::Error),

    /// IO error while writing the artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No item in the order has a positive quantity
    #[error("receipt has no items to include")]
    Empty,
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        let code = match &err {
            ReceiptError::Render(_) | ReceiptError::Empty => ErrorCode::ReceiptRenderFailed,
            ReceiptError::Io(_) => ErrorCode::ReceiptWriteFailed,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
