//! Tensor operations
//!
//! Operations are defined as traits implemented by runtime clients. This
//! gives each operation access to the client's device, generator, and
//! parallelism settings when creating its output tensor.
//!
//! ```text
//! CpuClient
//!   └── implements RandomOps
//!         ├── poisson                 (per-element rates)
//!         ├── poisson_with_generator  (explicit generator)
//!         └── poisson_scalar          (one rate, given shape)
//! ```
//!
//! # Implementing Operations for a New Backend
//!
//! Implement `RandomOps` for the backend's client. The trait's default bodies
//! return `Error::NotImplemented`, so a backend can add ops one at a time.
//! To stay reproducible, reserve `numel * MAX_DRAWS_PER_ELEMENT` counters once
//! per call and position element `i` at `offset + i * MAX_DRAWS_PER_ELEMENT`.

pub(crate) mod cpu;
mod traits;

pub use traits::RandomOps;
