//! Runtime backends for tensor computation
//!
//! ```text
//! CpuClient (dispatches operations)
//! ├── CpuDevice (identifies the host CPU)
//! ├── Generator (counter ranges for random ops)
//! └── ParallelismConfig (thread pool and task size)
//! ```
//!
//! Results of random ops are reproducible within a backend for a fixed
//! seed. Other backends derive counters the same way but are not required to
//! produce bit-identical values to the CPU.

pub mod cpu;
