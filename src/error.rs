//! Error types for the fraud verdict pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors local to a single prediction attempt.
///
/// None of these are retried automatically; a retry is a fresh user-triggered
/// attempt with corrected input.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range transaction input field
    #[error("invalid input for {field}: {message}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// What was wrong with the value
        message: String,
    },

    /// Scaler capability failure or shape mismatch
    #[error("scaling error: {0}")]
    Scaling(String),

    /// Classifier capability failure
    #[error("inference error: {0}")]
    Inference(String),
}
