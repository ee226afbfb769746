use thiserror::Error;

/// Error types for `AssocBuf` operations
///
/// A lookup miss is not an error: `AssocBuf::get` returns `None` for it.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AssocBufError {
    /// Initial capacity passed to `AssocBuf::new` is not usable
    #[error("Invalid initial capacity: {capacity}, must be at least 1")]
    InvalidCapacity {
        /// Capacity that was requested
        capacity: usize,
    },
    /// The allocator could not provide storage for the requested entries
    #[error("Allocation failed: could not reserve storage for {requested} entries")]
    AllocationFailed {
        /// Number of entry slots requested
        requested: usize,
    },
    /// Doubling the capacity would overflow `usize`
    #[error("Capacity overflow: cannot grow beyond {capacity} entries")]
    CapacityOverflow {
        /// Capacity at the moment growth was attempted
        capacity: usize,
    },
}
