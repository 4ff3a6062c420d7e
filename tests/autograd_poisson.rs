//! Integration tests for the Poisson gradient

mod common;

use common::create_cpu_client;
use rpois::autograd::{GradFn, PoissonBackward, Var, poisson_grad, var_poisson};
use rpois::dtype::DType;
use rpois::error::Error;
use rpois::random::draw_uniform;
use rpois::tensor::{Tensor, TensorId};

fn random_grad(shape: &[usize], seed: u64) -> Tensor {
    let n: usize = shape.iter().product();
    let data: Vec<f64> = (0..n as u64)
        .map(|i| 200.0 * draw_uniform(seed, i) - 100.0)
        .collect();
    Tensor::from_slice(&data, shape)
}

#[test]
fn test_gradient_is_zero_for_random_grad_output() {
    let (client, generator) = create_cpu_client(2021);
    let rates = Var::new(Tensor::full_scalar(&[16, 8], DType::F64, 10.0), true);
    let counts = var_poisson(&rates, &client).unwrap();
    let offset = generator.offset();

    let grad_output = random_grad(&[16, 8], 3);
    assert!(grad_output.to_vec::<f64>().iter().any(|&g| g != 0.0));

    let grads = counts.grad_fn().unwrap().backward(&grad_output).unwrap();
    let grad = grads[0].as_ref().unwrap();
    assert_eq!(grad.shape(), &[16, 8]);
    assert_eq!(grad.dtype(), DType::F64);
    assert!(grad.to_vec::<f64>().iter().all(|&g| g == 0.0));

    // Backward consumes no randomness
    assert_eq!(generator.offset(), offset);
}

#[test]
fn test_poisson_grad_matches_backward() {
    let rates = Tensor::from_slice(&[1.0f32, 2.0, 3.0], &[3]);
    let grad_output = Tensor::from_slice(&[f32::MAX, -1.0, 0.5], &[3]);

    let direct = poisson_grad(&grad_output, &rates).unwrap();
    let backward = PoissonBackward::new(rates.id(), rates.shape(), rates.dtype(), None);
    let via_fn = backward.backward(&grad_output).unwrap();

    assert_eq!(direct.to_vec::<f32>(), vec![0.0; 3]);
    assert_eq!(via_fn[0].as_ref().unwrap().as_bytes(), direct.as_bytes());
}

#[test]
fn test_grad_output_shape_mismatch() {
    let rates = Tensor::full_scalar(&[2, 3], DType::F32, 1.0);
    let grad_output = Tensor::full_scalar(&[3, 2], DType::F32, 1.0);
    match poisson_grad(&grad_output, &rates) {
        Err(Error::ShapeMismatch { expected, got }) => {
            assert_eq!(expected, vec![2, 3]);
            assert_eq!(got, vec![3, 2]);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_grad_output_dtype_mismatch() {
    let backward = PoissonBackward::new(TensorId::new(), &[4], DType::F32, None);
    let grad_output = Tensor::full_scalar(&[4], DType::F64, 1.0);
    assert!(matches!(
        backward.backward(&grad_output),
        Err(Error::DTypeMismatch { .. })
    ));
}
