//! Backward rules recorded on sampled outputs

use crate::error::Result;
use crate::tensor::{Tensor, TensorId};
use std::sync::Arc;

/// Backward rule attached to the output of a differentiable op
///
/// An external engine walks these from the loss towards the leaves. The
/// sampling ops in this crate record one input each, the rate tensor.
pub trait GradFn: Send + Sync {
    /// Map the gradient of the output to one gradient slot per input
    ///
    /// A `None` slot means that input receives nothing.
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Option<Tensor>>>;

    /// Ids of the inputs, in the order of the slots `backward` returns
    fn inputs(&self) -> &[TensorId];

    /// Backward rules of the inputs, `None` for leaves
    fn input_grad_fns(&self) -> Vec<Option<Arc<dyn GradFn>>> {
        vec![None; self.inputs().len()]
    }

    /// Name shown in `Debug` output of a `Var`
    fn name(&self) -> &'static str;
}
