//! Random number generation operations.
//!
//! This module defines the `RandomOps` trait for sampling from probability
//! distributions parameterized per element.

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::random::Generator;
use crate::tensor::Tensor;

/// Random number generation operations
///
/// All operations return a new tensor and leave their inputs untouched. Each
/// call reserves one counter range from a [`Generator`], so two calls never
/// reuse draws, and the same generator state always reproduces the same
/// output.
pub trait RandomOps {
    /// Sample from a Poisson distribution with a per-element rate
    ///
    /// Element `i` of the output is an independent draw from Poisson(`rates[i]`).
    ///
    /// # Mathematical Definition
    ///
    /// ```text
    /// P(X = k) = λ^k * e^(-λ) / k!
    ///
    /// Support: k ∈ {0, 1, 2, ...}
    /// Mean = λ
    /// Variance = λ
    /// ```
    ///
    /// # Algorithm
    ///
    /// - λ = 0: always 0
    /// - 0 < λ < 10: multiplicative inversion
    /// - λ ≥ 10: transformed rejection with squeeze (PTRS)
    ///
    /// # Arguments
    ///
    /// * `rates` - Tensor of rates λ ≥ 0 (F32 or F64)
    ///
    /// # Returns
    ///
    /// Tensor with the shape and dtype of `rates`, holding non-negative integer
    /// counts
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRate` if any rate is negative, NaN, infinite, or
    /// above `MAX_RATE`. No sampling happens and the generator is not advanced.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rpois::prelude::*;
    /// # let client = CpuClient::default();
    /// let rates = Tensor::from_slice(&[0.5f32, 3.0, 12.0, 0.0], &[2, 2]);
    /// let counts = client.poisson(&rates)?;
    /// assert_eq!(counts.shape(), &[2, 2]);
    /// assert_eq!(counts.to_vec::<f32>()[3], 0.0);
    /// # Ok::<(), rpois::error::Error>(())
    /// ```
    ///
    /// # Notes
    ///
    /// Counts are stored in the floating point dtype of `rates` so the op can
    /// sit in a float graph. They are exact up to
    /// [`DType::max_exact_integer`]: 2^24 for F32 and 2^53 for F64. F32 rates
    /// are still accepted up to `MAX_RATE`, so with rates near or above 2^24
    /// the stored counts are rounded to the nearest representable f32. Such
    /// calls log a `warn` record. Use F64 rates when counts that large must be
    /// exact.
    fn poisson(&self, rates: &Tensor) -> Result<Tensor> {
        let _ = rates;
        Err(Error::NotImplemented {
            feature: "RandomOps::poisson",
        })
    }

    /// Same as [`Self::poisson`], drawing from an explicit generator
    fn poisson_with_generator(&self, rates: &Tensor, generator: &Generator) -> Result<Tensor> {
        let _ = (rates, generator);
        Err(Error::NotImplemented {
            feature: "RandomOps::poisson_with_generator",
        })
    }

    /// Fill a new tensor with draws from Poisson(`lambda`)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for `lambda` if it is negative, NaN,
    /// infinite, or above `MAX_RATE`, and for `shape` if its element count
    /// overflows `usize` or the buffer could never be allocated.
    fn poisson_scalar(&self, lambda: f64, shape: &[usize], dtype: DType) -> Result<Tensor> {
        let _ = (lambda, shape, dtype);
        Err(Error::NotImplemented {
            feature: "RandomOps::poisson_scalar",
        })
    }
}
