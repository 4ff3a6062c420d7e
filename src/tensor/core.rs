//! Core Tensor type

use super::{Shape, Storage, TensorId};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array in contiguous row-major host memory
///
/// `Tensor` consists of:
/// - **Storage**: Reference-counted typed buffer
/// - **Shape**: Size along each dimension
/// - **DType**: Element type (determined at runtime, carried by the storage)
///
/// Tensors are immutable. Operations allocate a fresh output tensor and
/// leave their inputs untouched, so a rate tensor can be sampled any number
/// of times.
///
/// # Example
///
/// ```
/// use rpois::tensor::Tensor;
///
/// let rates = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// assert_eq!(rates.shape(), &[2, 2]);
/// assert_eq!(rates.to_vec::<f32>(), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub struct Tensor {
    /// Unique ID for autograd tracking
    id: TensorId,
    /// Host memory
    storage: Storage,
    /// Dimensions
    shape: Shape,
}

impl Tensor {
    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the `shape` dimensions.
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a tensor that takes ownership of `data`
    pub fn from_vec<T: Element>(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let shape = Shape::from(shape);
        if data.len() != shape.elem_count() {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            id: TensorId::new(),
            storage: T::into_storage(data),
            shape,
        })
    }

    /// Create a tensor filled with zeros
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows or cannot be allocated.
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let shape = Shape::from(shape);
        Self {
            id: TensorId::new(),
            storage: Storage::zeroed(shape.elem_count(), dtype),
            shape,
        }
    }

    /// Create a tensor filled with a scalar value
    ///
    /// The scalar is converted to the target dtype.
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows or cannot be allocated.
    pub fn full_scalar(shape: &[usize], dtype: DType, value: f64) -> Self {
        let shape = Shape::from(shape);
        let len = shape.elem_count();
        let storage = match dtype {
            DType::F64 => f64::into_storage(vec![value; len]),
            DType::F32 => f32::into_storage(vec![value as f32; len]),
        };
        Self {
            id: TensorId::new(),
            storage,
            shape,
        }
    }

    /// Get the tensor ID
    #[inline]
    pub fn id(&self) -> TensorId {
        self.id
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Borrow the elements as a typed slice
    ///
    /// Returns `Error::DTypeMismatch` if `T` is not this tensor's dtype.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        T::from_storage(&self.storage).ok_or(Error::DTypeMismatch {
            lhs: self.dtype(),
            rhs: T::DTYPE,
        })
    }

    /// Copy tensor data to a Vec on the host
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        match self.as_slice::<T>() {
            Ok(data) => data.to_vec(),
            Err(e) => panic!("Tensor::to_vec failed: {e}"),
        }
    }

    /// Raw element bytes, for bit-exact comparisons
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    /// Check that `other` has the same shape and dtype
    pub fn ensure_same_meta(&self, other: &Tensor) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        if self.dtype() != other.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: other.dtype(),
            });
        }
        Ok(())
    }
}

impl Clone for Tensor {
    /// Clone creates a new tensor sharing the same storage (zero-copy)
    fn clone(&self) -> Self {
        Self {
            id: TensorId::new(),
            storage: self.storage.clone(),
            shape: self.shape.clone(),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("id", &self.id)
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_length_mismatch() {
        let err = Tensor::try_from_slice(&[1.0f64, 2.0, 3.0], &[2, 2]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_zeros_and_full() {
        let z = Tensor::zeros(&[2, 3], DType::F64);
        assert_eq!(z.numel(), 6);
        assert!(z.to_vec::<f64>().iter().all(|&x| x == 0.0));

        let f = Tensor::full_scalar(&[4], DType::F32, 2.5);
        assert_eq!(f.to_vec::<f32>(), vec![2.5; 4]);
    }

    #[test]
    fn test_scalar_tensor() {
        let t = Tensor::from_slice(&[7.0f32], &[]);
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.numel(), 1);
    }

    #[test]
    fn test_as_slice_wrong_dtype() {
        let t = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
        assert!(matches!(
            t.as_slice::<f64>(),
            Err(Error::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_clone_gets_new_id() {
        let t = Tensor::from_slice(&[1.0f64], &[1]);
        let c = t.clone();
        assert_ne!(t.id(), c.id());
        assert_eq!(t.as_bytes(), c.as_bytes());
    }

    #[test]
    fn test_ensure_same_meta() {
        let a = Tensor::zeros(&[2, 2], DType::F32);
        assert!(a.ensure_same_meta(&Tensor::zeros(&[2, 2], DType::F32)).is_ok());
        assert!(matches!(
            a.ensure_same_meta(&Tensor::zeros(&[4], DType::F32)),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            a.ensure_same_meta(&Tensor::zeros(&[2, 2], DType::F64)),
            Err(Error::DTypeMismatch { .. })
        ));
    }
}
