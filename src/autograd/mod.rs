//! Gradient support for random ops
//!
//! This module supplies the pieces an autograd engine needs to route
//! gradients through sampling ops:
//!
//! - [`Var`]: a tensor plus its gradient function
//! - [`GradFn`]: the backward contract each op implements
//! - [`var_poisson`]: forward sampling that records [`PoissonBackward`]
//!
//! Graph traversal and gradient accumulation belong to the engine that
//! consumes these types.
//!
//! # Example
//!
//! ```
//! use rpois::prelude::*;
//! use rpois::autograd::{Var, var_poisson};
//!
//! let client = CpuClient::default();
//! let rates = Var::new(Tensor::from_slice(&[2.0f64, 30.0], &[2]), true);
//! let counts = var_poisson(&rates, &client)?;
//!
//! let grad_output = Tensor::from_slice(&[1.0f64, 1.0], &[2]);
//! let grads = counts.grad_fn().unwrap().backward(&grad_output)?;
//! assert_eq!(grads[0].as_ref().unwrap().to_vec::<f64>(), vec![0.0, 0.0]);
//! # Ok::<(), rpois::error::Error>(())
//! ```

mod grad_fn;
pub mod ops;
mod var;
mod var_ops;

pub use grad_fn::GradFn;
pub use ops::{PoissonBackward, poisson_grad};
pub use var::Var;
pub use var_ops::var_poisson;
