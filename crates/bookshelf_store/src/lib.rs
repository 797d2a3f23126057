//! # BookShelf Store
//!
//! Persistent slot storage for BookShelf.
//!
//! This crate provides the lowest-level persistence abstraction for the
//! collection tracker: named slots in durable key-value storage, each
//! holding one opaque byte blob that is always written and read as a
//! whole.
//!
//! ## Design Principles
//!
//! - Slots are simple blob stores (load, save, remove)
//! - No knowledge of what the blobs contain - callers own the format
//! - Saves replace the entire slot, never parts of it
//! - Must be `Send + Sync` so handles can cross thread boundaries
//!
//! ## Available Stores
//!
//! - [`MemorySlotStore`] - For testing and ephemeral storage
//! - [`FileSlotStore`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use bookshelf_store::{MemorySlotStore, SlotStore};
//!
//! let mut store = MemorySlotStore::new();
//! store.save("books", br#"[{"title":"Dune"}]"#).unwrap();
//! let blob = store.load("books").unwrap();
//! assert!(blob.is_some());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod slot;

pub use error::{StoreError, StoreResult};
pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
pub use slot::{validate_key, SlotStore};
