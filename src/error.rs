//! Service error taxonomy and grepable error codes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use grid::GridError;
use serde::Serialize;
use uuid::Uuid;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

impl ErrorCode for GridError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PlacementExhausted { .. } => "E_PLACEMENT_EXHAUSTED",
            Self::NotFound(_) => "E_BLOCK_NOT_FOUND",
            Self::CollisionRejected(_) => "E_COLLISION",
            Self::OutOfBounds(_) => "E_OUT_OF_BOUNDS",
            Self::InvalidSpan { .. } => "E_INVALID_SPAN",
            Self::InvalidConfig { .. } => "E_INVALID_CONFIG",
        }
    }

    /// A collision clears once the other block moves away.
    fn retryable(&self) -> bool {
        matches!(self, Self::CollisionRejected(_))
    }
}

// =============================================================================
// DOCUMENT ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document not open: {0}")]
    DocumentNotOpen(Uuid),
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DocumentNotOpen(_) => "E_DOCUMENT_NOT_OPEN",
            Self::Grid(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::DocumentNotOpen(_) => false,
            Self::Grid(e) => e.retryable(),
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

impl ErrorBody {
    #[must_use]
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { code: err.error_code(), message: err.to_string(), retryable: err.retryable() }
    }
}
