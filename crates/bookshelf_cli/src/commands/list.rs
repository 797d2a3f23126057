//! List command implementation.

use bookshelf_core::{Book, SortOrder};
use std::error::Error;
use std::path::Path;

/// Runs the list command.
pub fn run(
    dir: &Path,
    query: Option<&str>,
    order: &str,
    format: &str,
) -> Result<(), Box<dyn Error>> {
    let order = parse_order(order)?;
    let shelf = super::open_shelf(dir, order)?;

    let query = query.unwrap_or("").trim();
    let books = shelf.list_filtered(query);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&books)?);
        }
        _ => {
            print_text_output(&books, shelf.len(), query);
        }
    }

    Ok(())
}

/// Parses a sort order name.
fn parse_order(name: &str) -> Result<SortOrder, Box<dyn Error>> {
    match name {
        "title" => Ok(SortOrder::TitleAscending),
        "recent" => Ok(SortOrder::RecencyDescending),
        other => Err(format!("unknown sort order {other:?} (expected title or recent)").into()),
    }
}

fn print_text_output(books: &[Book], total: usize, query: &str) {
    if query.is_empty() {
        if books.is_empty() {
            println!("No books yet. Add your first with `bookshelf add`.");
            return;
        }
        println!("{}", super::count_label(books.len()));
    } else {
        println!(
            "{} of {} match {:?}",
            books.len(),
            super::count_label(total),
            query
        );
    }

    for book in books {
        println!();
        println!("{}", book.title);
        println!("  {}", book.author);
        if let Some(isbn) = &book.isbn {
            println!("  ISBN: {isbn}");
        }
        println!("  id: {}", book.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_names_parse() {
        assert_eq!(parse_order("title").unwrap(), SortOrder::TitleAscending);
        assert_eq!(parse_order("recent").unwrap(), SortOrder::RecencyDescending);
    }

    #[test]
    fn unknown_order_is_rejected() {
        assert!(parse_order("isbn").is_err());
    }
}
