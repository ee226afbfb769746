#![no_std]

//! `AssocBuf`: a minimal key-value map over borrowed text.
//!
//! `AssocBuf` stores `(key, value)` pairs of `&str` in one contiguous, owned,
//! growable buffer. It never copies the text: the caller keeps ownership and
//! the lifetime `'a` makes the compiler check that the text outlives the map.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `insert()`: amortized O(1), capacity doubles when full
//! - `get()`, `contains_key()`: O(n) - linear scan in insertion order
//! - `len()`, `capacity()`: O(1)
//!
//! There is no hash index on purpose. The scan order is what makes the
//! first inserted entry win when a key repeats.
//!
//! ## Space Complexity
//! - Two fat pointers per entry, no copies of key or value text
//! - Capacity never shrinks
//!
//! # Basic Usage
//!
//! ```
//! # use assocbuf::AssocBuf;
//! let mut map = AssocBuf::new(2).unwrap();
//!
//! map.insert("a", "1").unwrap();
//! map.insert("b", "2").unwrap();
//! map.insert("c", "3").unwrap(); // grows from 2 to 4
//!
//! assert_eq!(map.get("b"), Some("2"));
//! assert_eq!(map.get("z"), None);
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.capacity(), 4);
//! ```
//!
//! # Duplicate Keys
//!
//! Inserting an existing key does not replace it. Both entries are stored and
//! lookup returns the earlier one:
//!
//! ```
//! # use assocbuf::AssocBuf;
//! let mut map = AssocBuf::new(4).unwrap();
//! map.insert("x", "1").unwrap();
//! map.insert("x", "2").unwrap();
//!
//! assert_eq!(map.get("x"), Some("1"));
//! assert_eq!(map.len(), 2);
//! ```
//!
//! # Borrowed Text
//!
//! Values returned by `get()` borrow from the caller's text, not from the map,
//! so they stay usable after the map is dropped:
//!
//! ```
//! # use assocbuf::AssocBuf;
//! let key = String::from("name");
//! let value = String::from("Alice");
//!
//! let found = {
//!     let mut map = AssocBuf::with_default_capacity().unwrap();
//!     map.insert(&key, &value).unwrap();
//!     map.get("name")
//! };
//! assert_eq!(found, Some("Alice"));
//! ```
//!
//! # Errors
//!
//! A zero initial capacity is rejected, because doubling zero never grows:
//!
//! ```
//! # use assocbuf::{AssocBuf, AssocBufError};
//! assert_eq!(
//!     AssocBuf::new(0).unwrap_err(),
//!     AssocBufError::InvalidCapacity { capacity: 0 }
//! );
//! ```
//!
//! Allocation failures are returned as `AssocBufError::AllocationFailed`
//! rather than aborting the process.
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` for
//! `AssocBufError` and `std` support in `tracing`:
//! ```toml
//! [dependencies]
//! assocbuf = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing`: `debug` on construction, `trace` on
//! growth, `warn` on rejected capacity or failed allocation. No subscriber is
//! installed by this crate.

extern crate alloc;

mod buf;
mod entry;
mod error;

pub use buf::{AssocBuf, DEFAULT_CAPACITY};
pub use error::AssocBufError;
