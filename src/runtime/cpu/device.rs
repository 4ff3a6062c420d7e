//! CPU device implementation

/// The host CPU, the only device rates and counts ever live on
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuDevice;

impl CpuDevice {
    /// Create a new CPU device
    pub fn new() -> Self {
        Self
    }

    /// Name used in log records
    pub fn name(&self) -> &'static str {
        "cpu"
    }
}
