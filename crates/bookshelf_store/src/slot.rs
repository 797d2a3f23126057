//! Slot store trait definition.

use crate::error::{StoreError, StoreResult};

/// A named persistent slot in durable key-value storage.
///
/// Slot stores are **opaque blob stores**. Each key names one slot that
/// holds a single byte blob, written as a whole and read back as a whole.
/// Callers own all format interpretation - stores do not understand what
/// the bytes mean.
///
/// # Invariants
///
/// - `save` replaces the entire slot contents; there are no partial writes
/// - `load` returns exactly the bytes of the most recent successful `save`,
///   or `None` if the slot was never written
/// - Keys must satisfy [`validate_key`]
/// - Stores must be `Send + Sync` so handles can cross thread boundaries
///
/// # Implementors
///
/// - [`super::MemorySlotStore`] - For testing and ephemeral data
/// - [`super::FileSlotStore`] - For persistent storage
pub trait SlotStore: Send + Sync {
    /// Reads the full contents of a slot.
    ///
    /// Returns `None` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or an I/O error occurs.
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Overwrites a slot with the given bytes.
    ///
    /// The write is all-or-nothing: after a successful return the slot
    /// holds exactly `bytes`; after a failure it holds its previous
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or an I/O error occurs.
    fn save(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()>;

    /// Deletes a slot, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or an I/O error occurs.
    fn remove(&mut self, key: &str) -> StoreResult<bool>;

    /// Checks whether a slot has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or an I/O error occurs.
    fn contains(&self, key: &str) -> StoreResult<bool>;
}

/// Validates a slot key.
///
/// Keys must start with an ASCII letter or digit and may contain only
/// ASCII letters, digits, `_`, `-`, and `.`. This keeps every key
/// representable as a plain file name on all platforms.
///
/// # Errors
///
/// Returns [`StoreError::InvalidKey`] describing the violation.
pub fn validate_key(key: &str) -> StoreResult<()> {
    let mut chars = key.chars();
    match chars.next() {
        None => return Err(StoreError::invalid_key(key, "key is empty")),
        Some(c) if !c.is_ascii_alphanumeric() => {
            return Err(StoreError::invalid_key(
                key,
                "key must start with an ASCII letter or digit",
            ));
        }
        Some(_) => {}
    }

    if chars.any(|c| !c.is_ascii_alphanumeric() && !matches!(c, '_' | '-' | '.')) {
        return Err(StoreError::invalid_key(
            key,
            "key may contain only ASCII letters, digits, '_', '-', and '.'",
        ));
    }

    Ok(())
}
