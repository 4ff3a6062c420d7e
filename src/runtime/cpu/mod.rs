//! CPU runtime implementation
//!
//! The CPU runtime keeps tensors in host memory and runs elementwise kernels
//! on rayon (with the default `rayon` feature) or sequentially.

mod client;
mod device;
pub(crate) mod helpers;
pub mod kernels;
mod parallelism;

pub use crate::tensor::Tensor;
pub use client::CpuClient;
pub use device::CpuDevice;
pub use parallelism::ParallelismConfig;
