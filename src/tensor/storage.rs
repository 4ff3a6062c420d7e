//! Storage: host memory with Arc-based sharing

use crate::dtype::DType;
use std::sync::Arc;

/// Typed host buffer backing a tensor
///
/// Cloning increments the reference count; the buffer is immutable once
/// wrapped, so sharing it between tensors is always sound.
#[derive(Clone)]
pub enum Storage {
    /// 64-bit float buffer
    F64(Arc<[f64]>),
    /// 32-bit float buffer
    F32(Arc<[f32]>),
}

impl Storage {
    /// Allocate a zero-filled buffer of `len` elements
    pub fn zeroed(len: usize, dtype: DType) -> Self {
        match dtype {
            DType::F64 => Self::F64(Arc::from(vec![0.0f64; len])),
            DType::F32 => Self::F32(Arc::from(vec![0.0f32; len])),
        }
    }

    /// Number of elements (not bytes)
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::F64(data) => data.len(),
            Self::F32(data) => data.len(),
        }
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            Self::F64(_) => DType::F64,
            Self::F32(_) => DType::F32,
        }
    }

    /// Raw bytes of the buffer in native endianness
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::F64(data) => bytemuck::cast_slice(&data[..]),
            Self::F32(data) => bytemuck::cast_slice(&data[..]),
        }
    }

    fn strong_count(&self) -> usize {
        match self {
            Self::F64(data) => Arc::strong_count(data),
            Self::F32(data) => Arc::strong_count(data),
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len())
            .field("dtype", &self.dtype())
            .field("refs", &self.strong_count())
            .finish()
    }
}
