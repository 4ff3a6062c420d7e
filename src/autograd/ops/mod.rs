//! Backward implementations for differentiable operations

mod random;

pub use random::{PoissonBackward, poisson_grad};
