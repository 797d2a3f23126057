//! In-memory slot store for testing.

use crate::error::StoreResult;
use crate::slot::{validate_key, SlotStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// An in-memory slot store.
///
/// Keeps every slot in a process-local map; nothing touches the
/// filesystem, which is exactly what tests and ephemeral collections
/// want.
///
/// # Shared contents
///
/// Cloning a `MemorySlotStore` produces a handle onto the same slots, so
/// a test can hand one handle to the code under test and keep another to
/// inspect what was persisted.
///
/// # Example
///
/// ```rust
/// use bookshelf_store::{MemorySlotStore, SlotStore};
///
/// let mut store = MemorySlotStore::new();
/// store.save("books", b"[]").unwrap();
/// assert_eq!(store.load("books").unwrap(), Some(b"[]".to_vec()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySlotStore {
    slots: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemorySlotStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one pre-written slot.
    ///
    /// Useful for testing load and recovery scenarios.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.slots.write().insert(key.into(), bytes.into());
        store
    }

    /// Returns a copy of a slot's current contents, if any.
    ///
    /// Lets a test assert on the exact bytes the code under test wrote.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.read().get(key).cloned()
    }

    /// Returns the number of written slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.read().len()
    }

    /// Clears all slots.
    pub fn clear(&mut self) {
        self.slots.write().clear();
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.slots.read().get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        validate_key(key)?;
        self.slots.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        Ok(self.slots.write().remove(key).is_some())
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        Ok(self.slots.read().contains_key(key))
    }
}
