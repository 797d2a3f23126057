//! CLI command implementations.

pub mod add;
pub mod list;
pub mod remove;

use bookshelf_core::{Shelf, ShelfConfig, SortOrder};
use bookshelf_store::FileSlotStore;
use std::error::Error;
use std::path::Path;

/// Opens the collection stored under `dir`, creating the directory if
/// needed.
pub(crate) fn open_shelf(dir: &Path, order: SortOrder) -> Result<Shelf, Box<dyn Error>> {
    let store = FileSlotStore::open(dir)?;
    Ok(Shelf::open(Box::new(store), ShelfConfig::new().order(order)))
}

/// Formats a record count with the right plural.
pub(crate) fn count_label(count: usize) -> String {
    if count == 1 {
        "1 book".to_string()
    } else {
        format!("{count} books")
    }
}
