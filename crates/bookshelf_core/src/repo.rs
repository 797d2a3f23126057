//! Typed persistence for the collection.

use crate::book::Book;
use crate::error::ShelfResult;
use bookshelf_store::SlotStore;
use std::fmt;

/// Loads and saves the whole collection through a slot store.
///
/// The repository owns the serialized format: one JSON array holding
/// every record, replaced wholesale on each save. The store underneath
/// only ever sees opaque bytes, so swapping it (file, in-memory, or
/// something else) never touches collection logic.
pub struct BookRepository {
    store: Box<dyn SlotStore>,
    slot_key: String,
}

impl BookRepository {
    /// Creates a repository over `store`, reading and writing `slot_key`.
    #[must_use]
    pub fn new(store: Box<dyn SlotStore>, slot_key: impl Into<String>) -> Self {
        Self {
            store,
            slot_key: slot_key.into(),
        }
    }

    /// Returns the slot key this repository uses.
    #[must_use]
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Loads the full collection.
    ///
    /// A slot that has never been written yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails or the blob does not
    /// decode.
    pub fn load(&self) -> ShelfResult<Vec<Book>> {
        match self.store.load(&self.slot_key)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Saves the full collection, replacing the previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the store write fails.
    pub fn save(&mut self, books: &[Book]) -> ShelfResult<()> {
        let bytes = serde_json::to_vec(books)?;
        self.store.save(&self.slot_key, &bytes)?;
        Ok(())
    }
}

impl fmt::Debug for BookRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookRepository")
            .field("slot_key", &self.slot_key)
            .finish_non_exhaustive()
    }
}
