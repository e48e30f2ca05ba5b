//! Local validation errors
//!
//! All variants are detected before any store call is made; a rejected order
//! never touches persistence.

use thiserror::Error;

/// Validation failures local to a single posting call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Seller is required")]
    MissingSeller,

    #[error("Installment orders require a delivery (base) date")]
    MissingBaseDate,

    #[error("Offset count mismatch: expected {expected}, got {actual}")]
    OffsetCountMismatch { expected: usize, actual: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
