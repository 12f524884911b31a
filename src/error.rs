// In: src/error.rs

//! This module defines the single, unified error type for the entire typebridge
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

use crate::types::SqlDataType;

#[derive(Error, Debug)]
pub enum BridgeError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Vector/column type mismatch: column is {expected:?}, vector holds {actual}")]
    TypeMismatch {
        expected: SqlDataType,
        actual: &'static str,
    },

    #[error("Internal logic error (this is a bug): {0}")]
    Internal(String),

    // =========================================================================
    // === Wire-Contract Violations
    // =========================================================================
    #[error("Buffer length mismatch: need at least {0} bytes, got {1}")]
    BufferMismatch(usize, usize),

    #[error("Indicator array too short: need {0} entries, got {1}")]
    IndicatorMismatch(usize, usize),

    #[error("Column type {0} requires an explicit indicator array")]
    MissingIndicators(SqlDataType),

    #[error("Element at row {row} is {len} bytes, exceeding the allowed width of {max}")]
    LengthExceeded { row: usize, len: usize, max: usize },

    #[error("Decimal value {value} at row {row} does not fit in the maximum wire length")]
    NumericOverflow { row: usize, value: f64 },

    #[error("Character decoding failed: {0}")]
    Encoding(String),

    #[error("Date/time fields at row {row} are outside the calendar domain")]
    InvalidTemporal { row: usize },

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for BridgeError {
    fn from(err: bytemuck::PodCastError) -> Self {
        BridgeError::PodCast(err.to_string())
    }
}
