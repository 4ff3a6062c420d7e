//! Operations on Var that build the computation graph

use super::{Var, ops::PoissonBackward};
use crate::error::Result;
use crate::ops::RandomOps;
use std::sync::Arc;

/// Poisson sampling: z ~ Poisson(a), elementwise
///
/// The output is not a function of `a` in the calculus sense; its gradient
/// with respect to `a` is defined as zero.
pub fn var_poisson<C>(a: &Var, client: &C) -> Result<Var>
where
    C: RandomOps,
{
    let output = client.poisson(a.tensor())?;

    if a.requires_grad() {
        let grad_fn = PoissonBackward::new(
            a.id(),
            a.shape(),
            a.tensor().dtype(),
            a.grad_fn().cloned(),
        );
        Ok(Var::from_op(output, Arc::new(grad_fn)))
    } else {
        Ok(Var::new(output, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::random::Generator;
    use crate::runtime::cpu::CpuClient;
    use crate::tensor::Tensor;

    fn client() -> CpuClient {
        CpuClient::default().with_generator(Arc::new(Generator::new(11)))
    }

    #[test]
    fn test_var_poisson_tracks_grad() {
        let rates = Var::new(Tensor::from_slice(&[1.0f32, 20.0, 0.0], &[3]), true);
        let out = var_poisson(&rates, &client()).unwrap();

        assert!(out.requires_grad());
        let grad_fn = out.grad_fn().unwrap();
        assert_eq!(grad_fn.name(), "PoissonBackward");
        assert_eq!(grad_fn.inputs(), &[rates.id()]);

        let grads = grad_fn
            .backward(&Tensor::from_slice(&[0.3f32, -1.0, 2.0], &[3]))
            .unwrap();
        assert_eq!(grads[0].as_ref().unwrap().to_vec::<f32>(), vec![0.0; 3]);
    }

    #[test]
    fn test_var_poisson_no_grad() {
        let rates = Var::new(Tensor::full_scalar(&[5], DType::F64, 3.0), false);
        let out = var_poisson(&rates, &client()).unwrap();
        assert!(!out.requires_grad());
        assert!(out.grad_fn().is_none());
        assert_eq!(out.shape(), &[5]);
    }

    #[test]
    fn test_var_poisson_chains_input_grad_fn() {
        let c = client();
        let leaf = Var::new(Tensor::full_scalar(&[2], DType::F32, 4.0), true);
        let first = var_poisson(&leaf, &c).unwrap();
        let second = var_poisson(&first, &c).unwrap();

        let parents = second.grad_fn().unwrap().input_grad_fns();
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].as_ref().unwrap().name(), "PoissonBackward");
    }
}
