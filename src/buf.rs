use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use crate::entry::Entry;
use crate::error::AssocBufError;

/// Initial capacity used by `AssocBuf::with_default_capacity`.
pub const DEFAULT_CAPACITY: usize = 8;

/// An insertion-ordered key-value store over borrowed text.
///
/// Entries live in a single owned, contiguous buffer. Lookup is a linear scan
/// and the earliest inserted entry wins when keys repeat. Growth doubles the
/// capacity.
///
/// The container is not synchronized. `insert` needs `&mut self`, so sharing
/// an instance across threads requires a lock held by the caller.
#[derive(Debug)]
pub struct AssocBuf<'a> {
    entries: Vec<Entry<'a>>,
    capacity: usize,
}

impl<'a> AssocBuf<'a> {
    /// Creates an empty `AssocBuf` with storage for exactly `initial_capacity` entries.
    ///
    /// # Errors
    ///
    /// - `AssocBufError::InvalidCapacity` if `initial_capacity` is 0
    /// - `AssocBufError::AllocationFailed` if the storage cannot be allocated
    pub fn new(initial_capacity: usize) -> Result<Self, AssocBufError> {
        if initial_capacity == 0 {
            warn!("rejecting zero initial capacity");
            return Err(AssocBufError::InvalidCapacity {
                capacity: initial_capacity,
            });
        }

        let mut entries = Vec::new();
        reserve_slots(&mut entries, initial_capacity)?;
        debug!(capacity = initial_capacity, "created assoc buffer");

        Ok(Self {
            entries,
            capacity: initial_capacity,
        })
    }

    /// Creates an empty `AssocBuf` with `DEFAULT_CAPACITY` slots.
    ///
    /// # Errors
    ///
    /// Returns `AssocBufError::AllocationFailed` if the storage cannot be allocated.
    pub fn with_default_capacity() -> Result<Self, AssocBufError> {
        Self::new(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entry slots currently allocated. Never decreases.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn grow(&mut self) -> Result<(), AssocBufError> {
        let new_capacity =
            self.capacity
                .checked_mul(2)
                .ok_or(AssocBufError::CapacityOverflow {
                    capacity: self.capacity,
                })?;

        reserve_slots(&mut self.entries, new_capacity)?;
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "grew assoc buffer"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Appends a key-value pair.
    ///
    /// Doubles the capacity first if the buffer is full. Existing entries keep
    /// their order and indices. Repeated keys are stored as-is; `get` returns
    /// the value of the first one.
    ///
    /// # Errors
    ///
    /// - `AssocBufError::CapacityOverflow` if the doubled capacity does not fit in `usize`
    /// - `AssocBufError::AllocationFailed` if the larger storage cannot be allocated
    ///
    /// The buffer is left unchanged on error.
    pub fn insert(&mut self, key: &'a str, value: &'a str) -> Result<(), AssocBufError> {
        if self.entries.len() == self.capacity {
            self.grow()?;
        }
        self.entries.push(Entry::new(key, value));
        Ok(())
    }

    /// Returns the value of the first entry whose key equals `key`.
    ///
    /// Scans in insertion order, O(len). The returned text is the caller's
    /// original borrow, so it may outlive `&self`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(key))
            .map(|entry| entry.value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

// `Vec::try_reserve_exact` counts from `len`, not from the current allocation.
fn reserve_slots(entries: &mut Vec<Entry<'_>>, slots: usize) -> Result<(), AssocBufError> {
    let additional = slots.saturating_sub(entries.len());
    entries.try_reserve_exact(additional).map_err(|_| {
        warn!(requested = slots, "assoc buffer allocation failed");
        AssocBufError::AllocationFailed { requested: slots }
    })
}
