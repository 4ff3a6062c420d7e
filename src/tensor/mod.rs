//! Tensor types
//!
//! This module provides the core `Tensor` type, an n-dimensional array held in
//! contiguous host memory.

mod core;
mod id;
mod shape;
mod storage;

pub use core::Tensor;
pub use id::TensorId;
pub use shape::Shape;
pub use storage::Storage;
