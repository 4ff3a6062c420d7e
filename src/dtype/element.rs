//! Element trait for mapping Rust types to DType

use super::DType;
use crate::tensor::Storage;
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::sync::Arc;

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to the runtime dtype system.
/// It's implemented for `f32` and `f64`, the two precisions a rate tensor
/// may carry.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Shared across rayon workers
/// - `Pod + Zeroable` - Byte views of storage (bytemuck)
///
/// No arithmetic bounds: kernels work in f64 and convert at the edges through
/// `to_f64`/`from_f64`, so both precisions share one sampler.
pub trait Element: Copy + Send + Sync + Pod + Zeroable + 'static + fmt::Debug {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// Wrap an owned buffer into typed tensor storage
    fn into_storage(data: Vec<Self>) -> Storage;

    /// Borrow the typed buffer, `None` if the storage holds another dtype
    fn from_storage(storage: &Storage) -> Option<&[Self]>;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::F64(Arc::from(data))
    }

    fn from_storage(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::F64(data) => Some(&data[..]),
            _ => None,
        }
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::F32(Arc::from(data))
    }

    fn from_storage(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::F32(data) => Some(&data[..]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
    }

    #[test]
    fn test_storage_roundtrip_keeps_dtype() {
        let storage = f32::into_storage(vec![1.0, 2.0]);
        assert_eq!(f32::from_storage(&storage), Some(&[1.0f32, 2.0][..]));
        assert!(f64::from_storage(&storage).is_none());
    }

    #[test]
    fn test_integer_counts_are_exact() {
        for k in [0.0, 1.0, 17.0, 1_000_000.0] {
            assert_eq!(f32::from_f64(k).to_f64(), k);
        }
    }
}
