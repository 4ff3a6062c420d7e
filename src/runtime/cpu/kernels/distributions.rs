//! Distribution sampling kernels for CPU
//!
//! Every element draws from its own Philox stream, positioned at
//! `offset + index * MAX_DRAWS_PER_ELEMENT`. Elements never share counters,
//! so the kernel may visit them in any order, on any number of threads, and
//! still write the same values.

use crate::dtype::Element;
use crate::random::{GeneratorState, MAX_DRAWS_PER_ELEMENT, PhiloxStream, Poisson};
use crate::runtime::cpu::CpuClient;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Counter of the first draw element `index` may consume
#[inline]
pub fn element_counter(state: GeneratorState, index: usize) -> u64 {
    state
        .offset
        .wrapping_add((index as u64).wrapping_mul(MAX_DRAWS_PER_ELEMENT))
}

/// Sample the element at `index` of a tensor drawn under `state`
///
/// `lambda` must already satisfy `check_rate`.
#[inline]
pub fn poisson_element(lambda: f64, state: GeneratorState, index: usize) -> u64 {
    let mut stream = PhiloxStream::new(state.seed, element_counter(state, index));
    Poisson::new_unchecked(lambda).sample_with(&mut stream)
}

/// Sample Poisson counts for every rate
///
/// `out[i]` receives a draw from Poisson(`rates[i]`). Rates must be validated
/// by the caller.
pub fn poisson_kernel<T: Element>(
    client: &CpuClient,
    rates: &[T],
    out: &mut [T],
    state: GeneratorState,
) {
    debug_assert_eq!(rates.len(), out.len());

    #[cfg(feature = "rayon")]
    {
        let min_len = client.rayon_min_len();
        if rates.len() > min_len {
            client.install_parallelism(|| {
                out.par_iter_mut()
                    .zip(rates.par_iter())
                    .enumerate()
                    .with_min_len(min_len)
                    .for_each(|(i, (o, &rate))| {
                        *o = T::from_f64(poisson_element(rate.to_f64(), state, i) as f64);
                    });
            });
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    for (i, (o, &rate)) in out.iter_mut().zip(rates).enumerate() {
        *o = T::from_f64(poisson_element(rate.to_f64(), state, i) as f64);
    }
}
