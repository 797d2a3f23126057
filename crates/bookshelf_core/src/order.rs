//! Presentation ordering for listings.

use crate::book::Book;
use std::cmp::Ordering;

/// The order records are returned in for display.
///
/// Ordering is a presentation concern. The collection itself keeps
/// insertion order, and every listing operation sorts a copy on the way
/// out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Case-insensitive title, ascending. The default.
    #[default]
    TitleAscending,
    /// Most recently added first.
    RecencyDescending,
}

impl SortOrder {
    /// Sorts records in place according to this order.
    ///
    /// Sorting is stable, so records that compare equal keep their
    /// relative insertion order.
    pub fn apply(self, books: &mut [Book]) {
        match self {
            Self::TitleAscending => books.sort_by(|a, b| {
                compare_ci(&a.title, &b.title).then_with(|| compare_ci(&a.author, &b.author))
            }),
            Self::RecencyDescending => books.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        }
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
