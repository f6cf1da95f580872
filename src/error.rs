//! Input validation errors
//!
//! The numerical kernels never fail once their inputs are accepted. Every
//! check happens up front, at the public entry points, and reports the first
//! violated precondition through [`InvalidInputError`].

use thiserror::Error;

/// Precondition violated by the inputs of an operator or integrator
///
/// `name` always refers to the argument as it appears in the public
/// signature (`"variable"`, `"alfa"`, `"dx"`, ...).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// Field too short for the requested stencil
    #[error("field '{name}' has {len} points, at least {min} are required")]
    TooFewPoints {
        name: &'static str,
        len: usize,
        min: usize,
    },

    /// Field not aligned index-for-index with the primary field
    #[error("field '{name}' has {found} points, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// Scalar parameter that must be finite and strictly positive
    #[error("parameter '{name}' must be finite and strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// NaN or infinite sample found in a field
    #[error("field '{name}' holds a non-finite value ({value}) at index {index}")]
    NonFinite {
        name: &'static str,
        index: usize,
        value: f64,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, InvalidInputError>;
