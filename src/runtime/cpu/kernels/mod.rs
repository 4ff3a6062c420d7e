//! CPU kernel implementations
//!
//! Kernels are generic over `T: Element` and operate on plain slices. Input
//! validation happens in the op layer before a kernel runs.

pub mod distributions;

pub use distributions::{element_counter, poisson_element, poisson_kernel};
