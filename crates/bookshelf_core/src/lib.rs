//! # BookShelf Core
//!
//! Book collection manager for BookShelf.
//!
//! This crate owns the in-memory collection and everything around it:
//! - [`Shelf`] - the collection manager (add, remove, search, listing)
//! - [`Book`] / [`BookId`] - the record type and its opaque identifier
//! - [`find_duplicate`] - advisory duplicate detection
//! - [`BookRepository`] - whole-collection persistence over a slot store
//! - [`ChangeFeed`] / [`ShelfEvent`] - change notification for observers
//!
//! Persistence is deliberately coarse: the whole collection is one
//! serialized blob in one slot, rewritten after every mutation. That
//! keeps storage trivially swappable and makes the in-memory list the
//! single source of truth.
//!
//! ## Example
//!
//! ```rust
//! use bookshelf_core::{Shelf, ShelfConfig};
//! use bookshelf_store::MemorySlotStore;
//!
//! let store = MemorySlotStore::new();
//! let mut shelf = Shelf::open(Box::new(store), ShelfConfig::new());
//!
//! let book = shelf.add("Dune", "Frank Herbert", Some("9780441172719"));
//! assert_eq!(shelf.len(), 1);
//! assert!(shelf.find_duplicate("dune", "FRANK HERBERT", None).is_some());
//!
//! shelf.remove(book.id);
//! assert!(shelf.is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod change_feed;
mod config;
mod error;
mod order;
mod policy;
mod repo;
mod shelf;

pub use book::{Book, BookId};
pub use change_feed::{ChangeFeed, ShelfEvent};
pub use config::{ShelfConfig, DEFAULT_SLOT_KEY};
pub use error::{ShelfError, ShelfResult};
pub use order::SortOrder;
pub use policy::find_duplicate;
pub use repo::BookRepository;
pub use shelf::Shelf;

/// Crate version string, for tooling that reports it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
