//! Duplicate detection policy.

use crate::book::Book;

/// Finds an existing record that a proposed entry would duplicate.
///
/// Matching runs in priority order:
///
/// 1. If `isbn` is non-empty, the first record whose ISBN matches it
///    case-insensitively.
/// 2. Otherwise, or when no ISBN matched, the first record whose title
///    and author both match case-insensitively. Equality is exact, not
///    substring.
///
/// ISBN identifies an edition, so it outranks a title/author match even
/// when those fields disagree. This is an advisory query: callers decide
/// whether a hit blocks the add, prompts the user, or is ignored.
#[must_use]
pub fn find_duplicate<'a>(
    books: &'a [Book],
    title: &str,
    author: &str,
    isbn: Option<&str>,
) -> Option<&'a Book> {
    if let Some(isbn) = isbn.filter(|s| !s.is_empty()) {
        let needle = isbn.to_lowercase();
        let hit = books
            .iter()
            .find(|b| b.isbn.as_deref().is_some_and(|i| i.to_lowercase() == needle));
        if hit.is_some() {
            return hit;
        }
    }

    let title = title.to_lowercase();
    let author = author.to_lowercase();
    books
        .iter()
        .find(|b| b.title.to_lowercase() == title && b.author.to_lowercase() == author)
}
