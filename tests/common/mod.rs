//! Common test utilities
#![allow(dead_code)]

use rpois::random::Generator;
use rpois::runtime::cpu::{CpuClient, CpuDevice, ParallelismConfig};
use std::sync::Arc;

/// Create a CPU client drawing from its own generator seeded with `seed`
///
/// Integration tests run concurrently, so tests that compare outputs use an
/// isolated generator rather than the process-wide one.
pub fn create_cpu_client(seed: u64) -> (CpuClient, Arc<Generator>) {
    let generator = Arc::new(Generator::new(seed));
    let client = CpuClient::new(CpuDevice::new()).with_generator(Arc::clone(&generator));
    (client, generator)
}

/// Same as [`create_cpu_client`] with an explicit parallelism config
pub fn create_cpu_client_with(seed: u64, config: ParallelismConfig) -> (CpuClient, Arc<Generator>) {
    let (client, generator) = create_cpu_client(seed);
    (client.with_parallelism(config), generator)
}

/// Probability mass of Poisson(λ) at `k`, computed in log space
pub fn poisson_pmf(k: u64, lambda: f64) -> f64 {
    let mut log_k_fact = 0.0;
    for i in 2..=k {
        log_k_fact += (i as f64).ln();
    }
    (k as f64 * lambda.ln() - lambda - log_k_fact).exp()
}

/// Fraction of samples equal to each integer in `lo..=hi`
pub fn histogram(samples: &[f64], lo: u64, hi: u64) -> Vec<f64> {
    let mut counts = vec![0usize; (hi - lo + 1) as usize];
    for &s in samples {
        let k = s as u64;
        if (lo..=hi).contains(&k) {
            counts[(k - lo) as usize] += 1;
        }
    }
    counts
        .into_iter()
        .map(|c| c as f64 / samples.len() as f64)
        .collect()
}

/// Assert the empirical frequencies over `lo..=hi` match Poisson(λ)
///
/// Uses the formula: |freq - pmf| <= rtol * pmf
pub fn assert_matches_pmf(samples: &[f64], lambda: f64, lo: u64, hi: u64, rtol: f64) {
    let freqs = histogram(samples, lo, hi);
    for (i, freq) in freqs.iter().enumerate() {
        let k = lo + i as u64;
        let pmf = poisson_pmf(k, lambda);
        let diff = (freq - pmf).abs();
        assert!(
            diff <= rtol * pmf,
            "lambda={}: P(X={}) empirical {} vs exact {} (diff={}, tol={})",
            lambda,
            k,
            freq,
            pmf,
            diff,
            rtol * pmf
        );
    }
}

/// Sample mean and (population) variance
pub fn mean_var(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    (mean, var)
}

/// Assert every sample is a non-negative integer
pub fn assert_counts(samples: &[f64]) {
    for (i, &s) in samples.iter().enumerate() {
        assert!(
            s >= 0.0 && s.fract() == 0.0,
            "element {} is not a non-negative integer: {}",
            i,
            s
        );
    }
}
