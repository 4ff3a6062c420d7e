//! Data type system for rpois tensors
//!
//! Rates and samples live in floating point storage. Poisson counts are exact
//! integers, but they share the dtype of the rate tensor they were drawn from
//! so the operator slots into a float computation graph unchanged.

mod element;

pub use element::Element;

use std::fmt;

/// Element types supported by rpois tensors
///
/// # Discriminant Values
///
/// The discriminants follow the float range of the wider runtime
/// (F64=0, F32=1) and never change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point (most common)
    F32 = 1,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
        }
    }

    /// Largest integer the dtype represents exactly.
    ///
    /// Counts above this value are rounded when stored.
    #[inline]
    pub const fn max_exact_integer(self) -> f64 {
        match self {
            Self::F64 => 9_007_199_254_740_992.0, // 2^53
            Self::F32 => 16_777_216.0,            // 2^24
        }
    }

    /// Short name used in logs and error messages
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
