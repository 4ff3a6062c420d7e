//! CPU implementation of random operations.

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ops::RandomOps;
use crate::random::{Generator, MAX_DRAWS_PER_ELEMENT, check_rate};
use crate::runtime::cpu::{
    CpuClient,
    helpers::{dispatch_dtype, validate_rates},
    kernels,
};
use crate::tensor::{Shape, Tensor};

/// RandomOps implementation for CPU runtime.
impl RandomOps for CpuClient {
    fn poisson(&self, rates: &Tensor) -> Result<Tensor> {
        self.poisson_with_generator(rates, self.generator())
    }

    fn poisson_with_generator(&self, rates: &Tensor, generator: &Generator) -> Result<Tensor> {
        dispatch_dtype!(rates.dtype(), T => {
            let data = rates.as_slice::<T>()?;
            let peak = validate_rates(data)?;
            if peak > T::DTYPE.max_exact_integer() {
                tracing::warn!(
                    peak,
                    dtype = %T::DTYPE,
                    "rates exceed the exact integer range of the dtype; counts will be rounded"
                );
            }

            let draws = (data.len() as u64).wrapping_mul(MAX_DRAWS_PER_ELEMENT);
            let state = generator.reserve(draws);
            tracing::debug!(
                device = self.device().name(),
                numel = data.len(),
                dtype = %T::DTYPE,
                seed = state.seed,
                offset = state.offset,
                "poisson"
            );

            let mut out = vec![T::zero(); data.len()];
            kernels::poisson_kernel(self, data, &mut out, state);
            Tensor::from_vec(out, rates.shape())
        })
    }

    fn poisson_scalar(&self, lambda: f64, shape: &[usize], dtype: DType) -> Result<Tensor> {
        if let Err(reason) = check_rate(lambda) {
            return Err(Error::InvalidArgument {
                arg: "lambda",
                reason: format!("poisson requires {}, got {}", reason, lambda),
            });
        }

        // full_scalar would panic on these
        let fits = Shape::from(shape)
            .checked_elem_count()
            .and_then(|numel| numel.checked_mul(dtype.size_in_bytes()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(Error::InvalidArgument {
                arg: "shape",
                reason: format!("{:?} holds more {} elements than can be allocated", shape, dtype),
            });
        }

        let rates = Tensor::full_scalar(shape, dtype, lambda);
        self.poisson(&rates)
    }
}
