//! # Storage Layer
//!
//! This module defines the persistence abstraction for pixdex. The
//! [`KeyValueStore`] trait is deliberately narrow: the gallery keeps its whole
//! collection in a single serialized blob under one fixed key, so the store
//! only needs `get` and `set`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   under the data directory
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence
//!
//! The store owns the durable copy of the collection; [`crate::gallery::GalleryIndex`]
//! owns the in-memory working copy and writes through on every mutation.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract key-value persistence.
///
/// `get` returns `None` for an absent key; both methods surface backend
/// failures (disk errors, unavailable storage) as errors rather than
/// swallowing them — the gallery decides per call site whether a failure is
/// recoverable.
pub trait KeyValueStore {
    /// Read the serialized value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// Callers may keep ownership of a store and lend it to the gallery.
impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
