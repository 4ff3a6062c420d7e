//! Poisson sampler
//!
//! Two algorithms, split at [`PTRS_THRESHOLD`]:
//!
//! - λ < 10: multiplicative inversion (Knuth). Exact; expected draws λ + 1.
//! - λ ≥ 10: PTRS, transformed rejection with squeeze, from W. Hörmann,
//!   "The transformed rejection method for generating Poisson random
//!   variables", Insurance: Mathematics and Economics 12 (1993). Two draws per
//!   trial, acceptance rate above 0.86 for every λ ≥ 10.
//!
//! Both loops are bounded by [`MAX_DRAWS_PER_ELEMENT`], the per-element
//! counter budget the dispatch layer reserves.

use super::philox::word_to_uniform;
use crate::error::{Error, Result};
use rand::distr::Distribution;
use rand::{Rng, RngCore};

/// Rates at or above this use PTRS; the published constants are only valid here
pub const PTRS_THRESHOLD: f64 = 10.0;

/// Largest accepted rate
///
/// Beyond this, `λ + 0.43` and the candidate arithmetic lose integer
/// resolution in f64.
pub const MAX_RATE: f64 = 1e15;

/// Upper bound on the draws one sample may consume
pub const MAX_DRAWS_PER_ELEMENT: u64 = 256;

const HALF_LN_2PI: f64 = 0.918_938_533_204_672_8;

/// ln(k!) for k < 10
const LN_FACTORIAL_TABLE: [f64; 10] = [
    0.0,
    0.0,
    0.693_147_180_559_945_3,
    1.791_759_469_228_055,
    3.178_053_830_347_945_8,
    4.787_491_742_782_046,
    6.579_251_212_010_101,
    8.525_161_361_065_415,
    10.604_602_902_745_25,
    12.801_827_480_081_469,
];

/// ln(k!) for a non-negative integral `k`
///
/// Table lookup below 10, Stirling series with three correction terms above.
/// Absolute error is below 1e-10 everywhere.
pub fn log_factorial(k: f64) -> f64 {
    if k < LN_FACTORIAL_TABLE.len() as f64 {
        return LN_FACTORIAL_TABLE[k as usize];
    }
    let k_inv = 1.0 / k;
    let k_inv2 = k_inv * k_inv;
    (k + 0.5) * k.ln() - k
        + HALF_LN_2PI
        + (1.0 / 12.0 - (1.0 / 360.0 - k_inv2 / 1260.0) * k_inv2) * k_inv
}

/// Check the sampler's precondition on a single rate
///
/// Returns the reason on failure, to be wrapped with the element's position.
pub fn check_rate(lambda: f64) -> std::result::Result<(), &'static str> {
    if lambda.is_nan() {
        Err("rate must not be NaN")
    } else if lambda < 0.0 {
        Err("rate must be non-negative")
    } else if lambda.is_infinite() {
        Err("rate must be finite")
    } else if lambda > MAX_RATE {
        Err("rate exceeds the sampler's validated range of 1e15")
    } else {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct PtrsConstants {
    log_lambda: f64,
    a: f64,
    b: f64,
    inv_alpha: f64,
    v_r: f64,
}

impl PtrsConstants {
    fn new(lambda: f64) -> Self {
        let b = 0.931 + 2.53 * lambda.sqrt();
        Self {
            log_lambda: lambda.ln(),
            a: -0.059 + 0.02483 * b,
            b,
            inv_alpha: 1.1239 + 1.1328 / (b - 3.4),
            v_r: 0.9277 - 3.6224 / (b - 2.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Zero,
    Inversion { exp_neg_lambda: f64 },
    Ptrs(PtrsConstants),
}

/// Poisson(λ) distribution over non-negative integer counts
///
/// Per-rate constants are computed once in [`Poisson::new`], so reusing one
/// value for many samples of the same λ is cheaper than calling [`sample`].
///
/// # Example
///
/// ```
/// use rand::distr::Distribution;
/// use rpois::random::{PhiloxStream, Poisson};
///
/// let dist = Poisson::new(4.0)?;
/// let mut stream = PhiloxStream::new(42, 0);
/// let k: u64 = dist.sample(&mut stream);
/// assert!(stream.draws() >= 1);
/// # let _ = k;
/// # Ok::<(), rpois::error::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Poisson {
    lambda: f64,
    method: Method,
}

impl Poisson {
    /// Build the distribution, rejecting rates outside `[0, MAX_RATE]`
    pub fn new(lambda: f64) -> Result<Self> {
        check_rate(lambda).map_err(|reason| Error::invalid_rate(0, lambda, reason))?;
        Ok(Self::new_unchecked(lambda))
    }

    /// Build the distribution for a rate already checked by [`check_rate`]
    pub(crate) fn new_unchecked(lambda: f64) -> Self {
        let method = if lambda == 0.0 {
            Method::Zero
        } else if lambda < PTRS_THRESHOLD {
            Method::Inversion {
                exp_neg_lambda: (-lambda).exp(),
            }
        } else {
            Method::Ptrs(PtrsConstants::new(lambda))
        };
        Self { lambda, method }
    }

    /// The rate parameter
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Draw one count from `rng`
    ///
    /// Each uniform is one `next_u64` call; at most
    /// [`MAX_DRAWS_PER_ELEMENT`] are consumed.
    pub fn sample_with<R: RngCore + ?Sized>(&self, rng: &mut R) -> u64 {
        match self.method {
            Method::Zero => 0,
            Method::Inversion { exp_neg_lambda } => self.inversion(exp_neg_lambda, rng),
            Method::Ptrs(c) => self.ptrs(&c, rng),
        }
    }

    fn inversion<R: RngCore + ?Sized>(&self, exp_neg_lambda: f64, rng: &mut R) -> u64 {
        let mut product = 1.0;
        for k in 0..MAX_DRAWS_PER_ELEMENT {
            product *= word_to_uniform(rng.next_u64());
            if product <= exp_neg_lambda {
                return k;
            }
        }
        self.budget_exhausted()
    }

    fn ptrs<R: RngCore + ?Sized>(&self, c: &PtrsConstants, rng: &mut R) -> u64 {
        let lambda = self.lambda;
        for _ in 0..MAX_DRAWS_PER_ELEMENT / 2 {
            let u = word_to_uniform(rng.next_u64()) - 0.5;
            let v = word_to_uniform(rng.next_u64());
            let us = 0.5 - u.abs();
            let k = ((2.0 * c.a / us + c.b) * u + lambda + 0.43).floor();

            // Squeeze: accepted without evaluating the density
            if us >= 0.07 && v <= c.v_r {
                return k as u64;
            }
            if k < 0.0 || (us < 0.013 && v > us) {
                continue;
            }

            let lhs = (v * c.inv_alpha / (c.a / (us * us) + c.b)).ln();
            let rhs = -lambda + k * c.log_lambda - log_factorial(k);
            if lhs <= rhs {
                return k as u64;
            }
        }
        self.budget_exhausted()
    }

    #[cold]
    fn budget_exhausted(&self) -> u64 {
        if cfg!(debug_assertions) {
            panic!(
                "poisson sampler exhausted {} draws for rate {}",
                MAX_DRAWS_PER_ELEMENT, self.lambda
            );
        }
        tracing::warn!(
            lambda = self.lambda,
            budget = MAX_DRAWS_PER_ELEMENT,
            "poisson sampler exhausted its draw budget"
        );
        self.lambda.floor() as u64
    }
}

impl Distribution<u64> for Poisson {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> u64 {
        self.sample_with(rng)
    }
}

/// Draw one Poisson(λ) count from `rng`
pub fn sample<R: RngCore + ?Sized>(lambda: f64, rng: &mut R) -> Result<u64> {
    Ok(Poisson::new(lambda)?.sample_with(rng))
}
