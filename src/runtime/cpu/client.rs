//! CPU client implementation

use super::device::CpuDevice;
use super::parallelism::ParallelismConfig;
use crate::random::{Generator, default_generator};
use std::sync::Arc;

/// CPU client for operation dispatch
///
/// A client carries everything an op needs besides its tensors: the device,
/// the generator random ops draw from, and the parallelism settings. Clones
/// share the generator and thread pool.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    generator: Option<Arc<Generator>>,
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client drawing from the process-wide generator
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            generator: None,
            parallelism: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// The device this client runs on
    pub fn device(&self) -> &CpuDevice {
        &self.device
    }

    /// Use an isolated generator instead of the process-wide one
    pub fn with_generator(mut self, generator: Arc<Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// The generator random ops on this client draw from
    pub fn generator(&self) -> &Generator {
        match &self.generator {
            Some(generator) => generator,
            None => default_generator(),
        }
    }

    /// Apply a parallelism configuration
    ///
    /// With `max_threads` set, a dedicated rayon pool of that size is built.
    /// If the pool cannot be built the client keeps using the global pool.
    pub fn with_parallelism(mut self, config: ParallelismConfig) -> Self {
        #[cfg(feature = "rayon")]
        {
            self.pool = config.max_threads().and_then(|threads| {
                let built = rayon::ThreadPoolBuilder::new().num_threads(threads).build();
                match built {
                    Ok(pool) => Some(Arc::new(pool)),
                    Err(e) => {
                        tracing::warn!(threads, error = %e, "falling back to global rayon pool");
                        None
                    }
                }
            });
        }
        self.parallelism = config;
        self
    }

    /// Current parallelism configuration
    pub fn parallelism(&self) -> &ParallelismConfig {
        &self.parallelism
    }

    /// Minimum number of elements per rayon task
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.parallelism.chunk_size()
    }

    /// Run `op` inside this client's thread pool
    pub fn install_parallelism<OP, T>(&self, op: OP) -> T
    where
        OP: FnOnce() -> T + Send,
        T: Send,
    {
        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            return pool.install(op);
        }
        op()
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new(CpuDevice::new())
    }
}
