//! Property-based tests for the collection manager.

use bookshelf_core::{Shelf, ShelfConfig};
use bookshelf_store::MemorySlotStore;
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for non-empty, trimmed display text.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9 '.-]{0,30}")
        .expect("Invalid regex")
        .prop_map(|s| s.trim().to_string())
        .prop_filter("Display text must not be empty", |s| !s.is_empty())
}

/// Strategy for the ISBN field: absent, empty, or ISBN-shaped.
fn isbn_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(String::new())),
        3 => prop::string::string_regex("[0-9]{9}[0-9Xx]")
            .expect("Invalid regex")
            .prop_map(Some),
    ]
}

fn entry_strategy() -> impl Strategy<Value = (String, String, Option<String>)> {
    (text_strategy(), text_strategy(), isbn_strategy())
}

fn memory_shelf() -> Shelf {
    Shelf::open(Box::new(MemorySlotStore::new()), ShelfConfig::new())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn added_ids_are_always_unique(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        let mut shelf = memory_shelf();
        let mut seen = HashSet::new();
        for (title, author, isbn) in &entries {
            let book = shelf.add(title, author, isbn.as_deref());
            prop_assert!(seen.insert(book.id), "id reused: {:?}", book.id);
        }
        prop_assert_eq!(shelf.len(), entries.len());
    }

    #[test]
    fn isbn_is_never_stored_empty(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        let mut shelf = memory_shelf();
        for (title, author, isbn) in &entries {
            shelf.add(title, author, isbn.as_deref());
        }
        for book in shelf.books() {
            prop_assert!(book.isbn.as_deref() != Some(""));
        }
    }

    #[test]
    fn reopen_restores_every_record(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        let store = MemorySlotStore::new();
        let observer = store.clone();
        let mut shelf = Shelf::open(Box::new(store), ShelfConfig::new());
        for (title, author, isbn) in &entries {
            shelf.add(title, author, isbn.as_deref());
        }
        let before = shelf.books();
        drop(shelf);

        let reopened = Shelf::open(Box::new(observer), ShelfConfig::new());
        prop_assert_eq!(reopened.books(), before);
    }

    #[test]
    fn every_record_duplicates_itself(entries in prop::collection::vec(entry_strategy(), 1..10)) {
        let mut shelf = memory_shelf();
        for (title, author, isbn) in &entries {
            shelf.add(title, author, isbn.as_deref());
        }
        for book in shelf.books() {
            let hit = shelf.find_duplicate(&book.title, &book.author, book.isbn.as_deref());
            prop_assert!(hit.is_some(), "no duplicate found for {:?}", book.title);
        }
    }

    #[test]
    fn empty_query_lists_the_whole_collection(
        entries in prop::collection::vec(entry_strategy(), 0..20),
    ) {
        let mut shelf = memory_shelf();
        for (title, author, isbn) in &entries {
            shelf.add(title, author, isbn.as_deref());
        }
        prop_assert_eq!(shelf.list_filtered("").len(), shelf.len());
    }

    #[test]
    fn remove_many_removes_exactly_the_named_ids(
        entries in prop::collection::vec(entry_strategy(), 0..20),
        pick_mask in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut shelf = memory_shelf();
        let mut picked = Vec::new();
        for (i, (title, author, isbn)) in entries.iter().enumerate() {
            let book = shelf.add(title, author, isbn.as_deref());
            if pick_mask.get(i).copied().unwrap_or(false) {
                picked.push(book.id);
            }
        }

        let removed = shelf.remove_many(&picked);
        prop_assert_eq!(removed, picked.len());
        prop_assert_eq!(shelf.len(), entries.len() - picked.len());
        for id in &picked {
            prop_assert!(shelf.get(*id).is_none());
        }
    }
}
