//! Error types for the Primer library.
//!
//! This module provides a unified error type for every fallible operation in
//! the crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for Primer operations.
///
/// Every operation either succeeds completely or returns one of these
/// variants without mutating its inputs.
#[derive(Error, Debug)]
pub enum PrimerError {
    /// An aggregate was requested over a sequence with no elements
    #[error("Empty input: sequence must contain at least one element")]
    EmptyInput,

    /// A withdrawal asked for more than the account holds
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the caller tried to withdraw
        requested: f64,
        /// Balance at the time of the request
        available: f64,
    },

    /// A function defined only for non-negative arguments got a negative one
    #[error("Negative input: {0}")]
    NegativeInput(String),

    /// A monetary amount was negative
    #[error("Negative amount: {0}")]
    NegativeAmount(f64),

    /// A floating-point argument was NaN or infinite
    #[error("Non-finite value: {0}")]
    NonFinite(String),

    /// The result does not fit in the return type
    #[error("Overflow: {0}")]
    Overflow(String),

    /// A score outside 0..=100
    #[error("Score out of range: {0} (expected 0-100)")]
    ScoreOutOfRange(i64),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for Primer operations.
///
/// This is a type alias for `Result<T, PrimerError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, PrimerError>;

/// Fail with [`PrimerError::NonFinite`] unless `value` is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PrimerError::NonFinite(format!("{}={}", name, value)))
    }
}
