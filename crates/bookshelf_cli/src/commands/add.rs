//! Add command implementation.

use bookshelf_core::SortOrder;
use std::error::Error;
use std::path::Path;
use tracing::info;

/// Runs the add command.
///
/// Title and author are trimmed and must be non-empty. The manager
/// stores whatever it is given, so input validation lives at this
/// boundary. A duplicate hit aborts the add unless `force` is set.
pub fn run(
    dir: &Path,
    title: &str,
    author: &str,
    isbn: Option<&str>,
    force: bool,
) -> Result<(), Box<dyn Error>> {
    let (title, author, isbn) = validate_input(title, author, isbn)?;

    info!("Adding {:?} to collection in {:?}", title, dir);

    let mut shelf = super::open_shelf(dir, SortOrder::default())?;

    if let Some(existing) = shelf.find_duplicate(title, author, isbn) {
        if !force {
            return Err(format!(
                "already in your collection: {:?} by {} ({}) - use --force to add anyway",
                existing.title, existing.author, existing.id
            )
            .into());
        }
        info!("Duplicate of {} - adding anyway", existing.id);
    }

    let book = shelf.add(title, author, isbn);
    match &book.isbn {
        Some(isbn) => println!(
            "Added {:?} by {} (ISBN {}), id {}",
            book.title, book.author, isbn, book.id
        ),
        None => println!("Added {:?} by {}, id {}", book.title, book.author, book.id),
    }
    println!("Collection now holds {}.", super::count_label(shelf.len()));

    Ok(())
}

/// Trims the raw arguments and rejects a blank title or author. A blank
/// ISBN becomes unknown rather than an error.
fn validate_input<'a>(
    title: &'a str,
    author: &'a str,
    isbn: Option<&'a str>,
) -> Result<(&'a str, &'a str, Option<&'a str>), Box<dyn Error>> {
    let title = title.trim();
    let author = author.trim();
    if title.is_empty() {
        return Err("title must not be empty".into());
    }
    if author.is_empty() {
        return Err("author must not be empty".into());
    }
    let isbn = isbn.map(str::trim).filter(|s| !s.is_empty());
    Ok((title, author, isbn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_trimmed() {
        let (title, author, isbn) =
            validate_input("  Dune ", " Frank Herbert ", Some(" 9780441172719 ")).unwrap();
        assert_eq!(title, "Dune");
        assert_eq!(author, "Frank Herbert");
        assert_eq!(isbn, Some("9780441172719"));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(validate_input("   ", "Frank Herbert", None).is_err());
    }

    #[test]
    fn blank_author_is_rejected() {
        assert!(validate_input("Dune", "", None).is_err());
    }

    #[test]
    fn blank_isbn_becomes_unknown() {
        let (_, _, isbn) = validate_input("Dune", "Frank Herbert", Some("  ")).unwrap();
        assert_eq!(isbn, None);
    }

    #[test]
    fn add_writes_to_the_collection() {
        let dir = tempfile::TempDir::new().unwrap();
        run(dir.path(), " Dune ", "Frank Herbert", None, false).unwrap();

        let shelf = super::super::open_shelf(dir.path(), SortOrder::default()).unwrap();
        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf.books()[0].title, "Dune");
    }

    #[test]
    fn duplicate_is_refused_without_force() {
        let dir = tempfile::TempDir::new().unwrap();
        run(dir.path(), "Dune", "Frank Herbert", None, false).unwrap();

        let refused = run(dir.path(), "dune", "FRANK HERBERT", None, false);
        assert!(refused.is_err());

        let shelf = super::super::open_shelf(dir.path(), SortOrder::default()).unwrap();
        assert_eq!(shelf.len(), 1);
    }

    #[test]
    fn force_overrides_duplicate_check() {
        let dir = tempfile::TempDir::new().unwrap();
        run(dir.path(), "Dune", "Frank Herbert", None, false).unwrap();
        run(dir.path(), "Dune", "Frank Herbert", None, true).unwrap();

        let shelf = super::super::open_shelf(dir.path(), SortOrder::default()).unwrap();
        assert_eq!(shelf.len(), 2);
    }
}
