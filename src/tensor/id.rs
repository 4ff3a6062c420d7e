//! Process-wide tensor identities

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a tensor in a gradient graph
///
/// A gradient function lists the ids of the rate tensors it differentiates
/// with respect to. Every constructor and every clone draws a fresh id, so two
/// live tensors never share one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TensorId(u64);

impl TensorId {
    /// Allocate the next id
    #[inline]
    pub fn new() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TensorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_across_threads() {
        let allocate = || (0..100).map(|_| TensorId::new()).collect::<Vec<_>>();
        let ids: HashSet<TensorId> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(allocate)).collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(ids.len(), 400);
    }

    #[test]
    fn test_display() {
        let id = TensorId::new();
        assert!(id.to_string().starts_with('#'));
    }
}
