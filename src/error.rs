//! Error types for newsbrief.
//!
//! Extraction and summarization degrade silently on bad markup rather than
//! raising, so errors only exist at the validated input boundary.

/// Error type for validated inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bias weight was negative, NaN, or infinite.
    #[error("bias weights must be finite and non-negative (left: {left}, right: {right})")]
    InvalidBiasWeight {
        /// The left weight as supplied.
        left: f64,
        /// The right weight as supplied.
        right: f64,
    },

    /// Both bias weights were zero, leaving no ratio to normalize.
    #[error("bias weights must have a positive sum")]
    ZeroBiasTotal,
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
