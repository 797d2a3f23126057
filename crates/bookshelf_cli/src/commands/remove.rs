//! Remove command implementation.

use bookshelf_core::{BookId, SortOrder};
use std::error::Error;
use std::path::Path;
use tracing::info;

/// Runs the remove command.
///
/// Every id must parse; one malformed id fails the whole command before
/// anything is removed. Well-formed ids that match nothing are skipped.
pub fn run(dir: &Path, ids: &[String]) -> Result<(), Box<dyn Error>> {
    let ids = parse_ids(ids)?;

    info!("Removing {} id(s) from collection in {:?}", ids.len(), dir);

    let mut shelf = super::open_shelf(dir, SortOrder::default())?;

    let removed = match ids.as_slice() {
        [id] => usize::from(shelf.remove(*id)),
        many => shelf.remove_many(many),
    };

    if removed == 0 {
        println!("No matching books found.");
    } else {
        println!(
            "Removed {}. Collection now holds {}.",
            super::count_label(removed),
            super::count_label(shelf.len())
        );
    }

    Ok(())
}

/// Parses raw command-line ids, rejecting the first malformed one.
fn parse_ids(raw: &[String]) -> Result<Vec<BookId>, Box<dyn Error>> {
    raw.iter()
        .map(|s| {
            s.trim()
                .parse::<BookId>()
                .map_err(|e| format!("invalid book id {s:?}: {e}").into())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_after_trimming() {
        let raw = vec![" a9f0c1de-6a0f-4c2e-9d3b-2b4f31c1a771 ".to_string()];
        assert_eq!(parse_ids(&raw).unwrap().len(), 1);
    }

    #[test]
    fn malformed_id_fails_the_whole_command() {
        let raw = vec![
            "a9f0c1de-6a0f-4c2e-9d3b-2b4f31c1a771".to_string(),
            "not-an-id".to_string(),
        ];
        assert!(parse_ids(&raw).is_err());
    }

    #[test]
    fn remove_deletes_named_books() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut shelf = super::super::open_shelf(dir.path(), SortOrder::default()).unwrap();
        let gone = shelf.add("Dune", "Frank Herbert", None);
        let keep = shelf.add("Solaris", "Stanislaw Lem", None);
        drop(shelf);

        run(dir.path(), &[gone.id.to_string()]).unwrap();

        let shelf = super::super::open_shelf(dir.path(), SortOrder::default()).unwrap();
        assert_eq!(shelf.len(), 1);
        assert!(shelf.get(keep.id).is_some());
    }

    #[test]
    fn removing_absent_ids_succeeds_quietly() {
        let dir = tempfile::TempDir::new().unwrap();
        let outcome = run(dir.path(), &[BookId::new().to_string()]);
        assert!(outcome.is_ok());
    }
}
