//! Thread-count and work-splitting configuration for CPU kernels

/// How a CPU client spreads elementwise work across threads
///
/// - `max_threads`: size of a dedicated thread pool. `None` uses rayon's
///   global pool.
/// - `chunk_size`: minimum number of elements a single task processes.
///   `None` uses [`ParallelismConfig::DEFAULT_CHUNK_SIZE`].
///
/// Random ops produce identical results under every configuration; this
/// only changes how fast they run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    max_threads: Option<usize>,
    chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Elements per task when no chunk size is configured
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    /// Create a configuration
    pub fn new(max_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            max_threads,
            chunk_size,
        }
    }

    /// Requested thread count, if any
    pub fn max_threads(&self) -> Option<usize> {
        self.max_threads
    }

    /// Effective minimum elements per task, never zero
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(Self::DEFAULT_CHUNK_SIZE).max(1)
    }
}
