//! # rpois
//!
//! **Reproducible elementwise Poisson sampling for tensors.**
//!
//! rpois draws one independent Poisson sample per element of a rate tensor,
//! using a counter-based Philox RNG so the result depends only on the seed,
//! never on thread count or scheduling. The op carries a zero gradient so it
//! can sit inside a differentiable graph.
//!
//! ## Features
//!
//! - **Philox4x32-10**: counter-based engine with O(1) skip-ahead
//! - **Full λ range**: inversion below λ = 10, PTRS (Hörmann 1993) above
//! - **Reproducible**: one counter range reserved per call, fixed per-element budget
//! - **Parallel**: rayon kernels with results independent of chunking
//! - **Autograd**: `PoissonBackward` returns an all-zero gradient
//!
//! ## Quick Start
//!
//! ```rust
//! use rpois::prelude::*;
//!
//! rpois::random::set_seed(1234);
//! let client = CpuClient::default();
//!
//! let rates = Tensor::from_slice(&[0.5f64, 4.0, 25.0, 1e6], &[2, 2]);
//! let counts = client.poisson(&rates)?;
//! assert!(counts.to_vec::<f64>().iter().all(|&k| k >= 0.0 && k.fract() == 0.0));
//! # Ok::<(), rpois::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded CPU kernels

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod autograd;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod random;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::RandomOps;
    pub use crate::random::{Generator, GeneratorState};
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, ParallelismConfig};
    pub use crate::tensor::Tensor;
}
