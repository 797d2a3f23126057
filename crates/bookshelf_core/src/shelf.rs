//! The book collection manager.

use crate::book::{Book, BookId};
use crate::change_feed::{ChangeFeed, ShelfEvent};
use crate::config::ShelfConfig;
use crate::order::SortOrder;
use crate::policy;
use crate::repo::BookRepository;
use bookshelf_store::SlotStore;
use std::collections::HashSet;
use std::fmt;
use std::sync::mpsc::Receiver;
use tracing::warn;

/// The book collection manager.
///
/// `Shelf` owns the authoritative in-memory list of records. It loads
/// the list once when opened and writes the whole list back after every
/// mutation. Persistence is best-effort: a failed load means a cold
/// start with an empty collection, and a failed save leaves the
/// in-memory state authoritative until the next successful write. No
/// operation surfaces a storage error to the caller.
///
/// Duplicate handling is a two-step protocol: [`Shelf::find_duplicate`]
/// is an advisory query and [`Shelf::add`] is a plain append. Callers
/// that want to block duplicates check first and decide.
///
/// # Usage
///
/// ```rust,ignore
/// let store = FileSlotStore::open("bookshelf_data")?;
/// let mut shelf = Shelf::open(Box::new(store), ShelfConfig::new());
///
/// if shelf.find_duplicate("Dune", "Frank Herbert", None).is_none() {
///     shelf.add("Dune", "Frank Herbert", Some("9780441172719"));
/// }
///
/// for book in shelf.books() {
///     println!("{} by {}", book.title, book.author);
/// }
/// ```
pub struct Shelf {
    /// Authoritative record list, in insertion order.
    books: Vec<Book>,
    repo: BookRepository,
    feed: ChangeFeed,
    order: SortOrder,
}

impl Shelf {
    /// Opens a collection over the given store.
    ///
    /// The persisted list is loaded once, here. A slot that has never
    /// been written yields an empty collection; a slot that fails to
    /// read or decode is logged and also treated as empty. Opening never
    /// fails.
    #[must_use]
    pub fn open(store: Box<dyn SlotStore>, config: ShelfConfig) -> Self {
        let repo = BookRepository::new(store, config.slot_key);
        let books = match repo.load() {
            Ok(books) => books,
            Err(e) => {
                warn!(
                    "failed to load collection from slot {:?}, starting empty: {}",
                    repo.slot_key(),
                    e
                );
                Vec::new()
            }
        };
        Self {
            books,
            repo,
            feed: ChangeFeed::new(),
            order: config.order,
        }
    }

    /// Adds a book and returns the created record.
    ///
    /// A fresh id and timestamp are assigned here; an empty ISBN is
    /// stored as unknown. Title and author are stored exactly as given,
    /// so callers are expected to pass trimmed, non-empty text. No
    /// duplicate check happens - see [`Shelf::find_duplicate`].
    pub fn add(&mut self, title: &str, author: &str, isbn: Option<&str>) -> Book {
        let book = Book::new(title, author, isbn);
        self.books.push(book.clone());
        self.persist();
        self.feed.emit(ShelfEvent::Added(book.clone()));
        book
    }

    /// Removes the record with the given id.
    ///
    /// Returns whether a record was removed. Removing an absent id is a
    /// no-op, not an error: nothing is persisted and no event is
    /// emitted.
    pub fn remove(&mut self, id: BookId) -> bool {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        if self.books.len() == before {
            return false;
        }
        self.persist();
        self.feed.emit(ShelfEvent::Removed(id));
        true
    }

    /// Removes every record whose id is in `ids`, as one step.
    ///
    /// The collection is persisted once, after all removals, and one
    /// [`ShelfEvent::RemovedMany`] is emitted carrying the ids that were
    /// actually removed. Absent ids are skipped. Returns the number of
    /// records removed.
    pub fn remove_many(&mut self, ids: &[BookId]) -> usize {
        let requested: HashSet<BookId> = ids.iter().copied().collect();
        let mut removed = Vec::new();
        self.books.retain(|b| {
            if requested.contains(&b.id) {
                removed.push(b.id);
                false
            } else {
                true
            }
        });
        if removed.is_empty() {
            return 0;
        }
        let count = removed.len();
        self.persist();
        self.feed.emit(ShelfEvent::RemovedMany(removed));
        count
    }

    /// Advisory duplicate check for a proposed new entry.
    ///
    /// Returns the first existing record the entry would duplicate: by
    /// case-insensitive ISBN when `isbn` is non-empty, otherwise by
    /// case-insensitive title and author. The collection is not
    /// modified; pairing this with [`Shelf::add`] is the caller's
    /// choice.
    #[must_use]
    pub fn find_duplicate(&self, title: &str, author: &str, isbn: Option<&str>) -> Option<&Book> {
        policy::find_duplicate(&self.books, title, author, isbn)
    }

    /// Returns records matching `query`, in presentation order.
    ///
    /// An empty query returns the whole collection. A non-empty query
    /// keeps records whose title, author, or ISBN contains it as a
    /// case-insensitive substring. The result is an independent copy;
    /// the collection itself is not reordered.
    #[must_use]
    pub fn list_filtered(&self, query: &str) -> Vec<Book> {
        let mut result: Vec<Book> = if query.is_empty() {
            self.books.clone()
        } else {
            let needle = query.to_lowercase();
            self.books
                .iter()
                .filter(|b| matches_query(b, &needle))
                .cloned()
                .collect()
        };
        self.order.apply(&mut result);
        result
    }

    /// Returns the whole collection, in presentation order.
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.list_filtered("")
    }

    /// Returns the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Returns the number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the configured presentation order.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Subscribes to collection changes.
    ///
    /// Returns a receiver for all future [`ShelfEvent`]s, in mutation
    /// order. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<ShelfEvent> {
        self.feed.subscribe()
    }

    /// Writes the whole collection back to storage, best-effort.
    fn persist(&mut self) {
        if let Err(e) = self.repo.save(&self.books) {
            warn!(
                "failed to persist collection to slot {:?}, keeping in-memory state: {}",
                self.repo.slot_key(),
                e
            );
        }
    }
}

impl fmt::Debug for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shelf")
            .field("len", &self.books.len())
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// Case-insensitive substring match over title, author, and ISBN.
///
/// `needle` must already be lowercased.
fn matches_query(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
        || book
            .isbn
            .as_deref()
            .is_some_and(|i| i.to_lowercase().contains(needle))
}
