//! Reproducible random number generation
//!
//! - [`philox`]: the counter-based Philox4x32-10 engine
//! - [`poisson`]: the Poisson sampler built on top of it
//! - [`Generator`]: the `(seed, offset)` state every random op draws from
//!
//! # Reproducibility
//!
//! A generator never hands out the same counter twice. Each invocation of a
//! random op reserves a disjoint counter range with [`Generator::reserve`] and
//! derives every element's draws from `(seed, base + index * budget)`. The
//! result depends only on the seed, the reserved base, and each element's
//! index, never on thread count or evaluation order.
//!
//! There is one process-wide generator, returned by [`default_generator`] and
//! reseeded by [`set_seed`]. It starts at [`DEFAULT_SEED`]; OS entropy is
//! never consulted, so an unseeded program is still deterministic.

pub mod philox;
pub mod poisson;

pub use philox::{PhiloxStream, advance, draw_uniform, draw_word};
pub use poisson::{MAX_DRAWS_PER_ELEMENT, MAX_RATE, PTRS_THRESHOLD, Poisson, check_rate, sample};

use parking_lot::Mutex;
use std::sync::OnceLock;

/// Seed of every generator that has not been seeded explicitly
pub const DEFAULT_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Snapshot of a generator: the key and the next unreserved counter
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratorState {
    /// Philox key
    pub seed: u64,
    /// First counter not yet handed out
    pub offset: u64,
}

/// Seeded source of disjoint counter ranges
///
/// The state is locked only while a range is reserved, once per op
/// invocation; sampling itself runs without touching the generator.
///
/// # Example
///
/// ```
/// use rpois::random::Generator;
///
/// let generator = Generator::new(2021);
/// let first = generator.reserve(256);
/// let second = generator.reserve(256);
/// assert_eq!(first.offset, 0);
/// assert_eq!(second.offset, 256);
/// ```
#[derive(Debug)]
pub struct Generator {
    state: Mutex<GeneratorState>,
}

impl Generator {
    /// Create a generator with `seed` and a zero offset
    pub fn new(seed: u64) -> Self {
        Self {
            state: Mutex::new(GeneratorState { seed, offset: 0 }),
        }
    }

    /// Reseed, resetting the offset to zero
    pub fn set_seed(&self, seed: u64) {
        *self.state.lock() = GeneratorState { seed, offset: 0 };
        tracing::trace!(seed, "generator reseeded");
    }

    /// The seed currently in use
    pub fn initial_seed(&self) -> u64 {
        self.state.lock().seed
    }

    /// The next unreserved counter
    pub fn offset(&self) -> u64 {
        self.state.lock().offset
    }

    /// Snapshot the state, e.g. to replay a run later
    pub fn get_state(&self) -> GeneratorState {
        *self.state.lock()
    }

    /// Restore a snapshot taken with [`Self::get_state`]
    pub fn set_state(&self, state: GeneratorState) {
        *self.state.lock() = state;
        tracing::trace!(seed = state.seed, offset = state.offset, "generator state restored");
    }

    /// Atomically hand out `draws` counters
    ///
    /// Returns the state before the reservation; its `offset` is the base of
    /// the reserved range.
    pub fn reserve(&self, draws: u64) -> GeneratorState {
        let mut state = self.state.lock();
        let reserved = *state;
        state.offset = advance(state.offset, draws);
        reserved
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

static DEFAULT_GENERATOR: OnceLock<Generator> = OnceLock::new();

/// The process-wide generator
pub fn default_generator() -> &'static Generator {
    DEFAULT_GENERATOR.get_or_init(Generator::default)
}

/// Reseed the process-wide generator
///
/// The next random op after this call depends only on `seed`.
pub fn set_seed(seed: u64) {
    default_generator().set_seed(seed);
}
