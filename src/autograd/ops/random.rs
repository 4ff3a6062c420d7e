//! Backward implementations for random sampling ops

use crate::autograd::GradFn;
use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::{Shape, Tensor, TensorId};
use std::sync::Arc;

// ============================================================================
// PoissonBackward
// ============================================================================

/// Backward for Poisson sampling: z ~ Poisson(λ)
///
/// Gradient: dL/dλ = 0
///
/// Sampling is a discrete map from λ, so the op contributes exactly zero to
/// upstream gradients. This is the defined gradient, not an estimate.
/// Backward never draws random numbers.
pub struct PoissonBackward {
    input_id: TensorId,
    input_shape: Shape,
    dtype: DType,
    input_grad_fn: Option<Arc<dyn GradFn>>,
}

impl PoissonBackward {
    /// Create a new PoissonBackward for a rate tensor of `input_shape` and `dtype`
    pub fn new(
        input_id: TensorId,
        input_shape: &[usize],
        dtype: DType,
        input_grad_fn: Option<Arc<dyn GradFn>>,
    ) -> Self {
        Self {
            input_id,
            input_shape: Shape::from(input_shape),
            dtype,
            input_grad_fn,
        }
    }
}

impl GradFn for PoissonBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Option<Tensor>>> {
        let grad = zero_grad(grad_output, &self.input_shape, self.dtype)?;
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> &[TensorId] {
        std::slice::from_ref(&self.input_id)
    }

    fn input_grad_fns(&self) -> Vec<Option<Arc<dyn GradFn>>> {
        vec![self.input_grad_fn.clone()]
    }

    fn name(&self) -> &'static str {
        "PoissonBackward"
    }
}

/// Gradient of Poisson sampling with respect to `rates`
///
/// `grad_output` must match `rates` in shape and dtype. Its values are never
/// read; the result is all zeros.
pub fn poisson_grad(grad_output: &Tensor, rates: &Tensor) -> Result<Tensor> {
    zero_grad(grad_output, rates.shape(), rates.dtype())
}

// Elementwise op: the forward output has the input's shape and dtype.
fn zero_grad(grad_output: &Tensor, shape: &[usize], dtype: DType) -> Result<Tensor> {
    let grad = Tensor::zeros(shape, dtype);
    grad.ensure_same_meta(grad_output)?;
    Ok(grad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_poisson_backward_is_zero() {
        let grad_fn = PoissonBackward::new(TensorId::new(), &[2, 3], DType::F32, None);
        let grad_output = Tensor::from_slice(&[1.0f32, -2.0, 3.5, 1e30, -0.0, 7.0], &[2, 3]);

        let grads = grad_fn.backward(&grad_output).unwrap();
        assert_eq!(grads.len(), 1);
        let grad = grads[0].as_ref().unwrap();
        assert_eq!(grad.shape(), &[2, 3]);
        assert_eq!(grad.dtype(), DType::F32);
        assert!(grad.to_vec::<f32>().iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_poisson_backward_shape_mismatch() {
        let grad_fn = PoissonBackward::new(TensorId::new(), &[4], DType::F64, None);
        let grad_output = Tensor::zeros(&[2, 2], DType::F64);
        assert!(matches!(
            grad_fn.backward(&grad_output),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_poisson_backward_dtype_mismatch() {
        let grad_fn = PoissonBackward::new(TensorId::new(), &[4], DType::F64, None);
        let grad_output = Tensor::zeros(&[4], DType::F32);
        assert!(matches!(
            grad_fn.backward(&grad_output),
            Err(Error::DTypeMismatch {
                lhs: DType::F64,
                rhs: DType::F32
            })
        ));
    }

    #[test]
    fn test_poisson_grad_scalar_tensor() {
        let rates = Tensor::from_slice(&[4.0f64], &[]);
        let grad = poisson_grad(&Tensor::from_slice(&[9.0f64], &[]), &rates).unwrap();
        assert_eq!(grad.shape(), &[] as &[usize]);
        assert_eq!(grad.to_vec::<f64>(), vec![0.0]);
    }

    #[test]
    fn test_name_and_inputs() {
        let id = TensorId::new();
        let grad_fn = PoissonBackward::new(id, &[1], DType::F32, None);
        assert_eq!(grad_fn.name(), "PoissonBackward");
        assert_eq!(grad_fn.inputs(), &[id]);
        assert!(grad_fn.input_grad_fns()[0].is_none());
    }
}
