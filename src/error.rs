//! Error types for rpois

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using rpois's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rpois operations
#[derive(Error, Debug)]
pub enum Error {
    /// A rate parameter violates the sampler's precondition
    #[error("Invalid rate {value} at index {index}: {reason}")]
    InvalidRate {
        /// Flat (row-major) index of the first offending element
        index: usize,
        /// The offending value, widened to f64
        value: f64,
        /// Which precondition failed
        reason: &'static str,
    },

    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Feature not yet implemented
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Description of the unimplemented feature
        feature: &'static str,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid rate error
    pub fn invalid_rate(index: usize, value: f64, reason: &'static str) -> Self {
        Self::InvalidRate {
            index,
            value,
            reason,
        }
    }
}
