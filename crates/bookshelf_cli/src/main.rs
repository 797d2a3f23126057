//! BookShelf CLI
//!
//! Command-line tools for managing a personal book collection.
//!
//! # Commands
//!
//! - `add` - Add a book, with advisory duplicate detection
//! - `list` - List books, with search and sort options
//! - `remove` - Remove books by id

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// BookShelf command-line collection tools.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the collection data directory
    #[arg(global = true, short, long, default_value = "bookshelf_data")]
    dir: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the collection
    Add {
        /// Book title
        title: String,

        /// Book author
        author: String,

        /// ISBN, when known
        #[arg(short, long)]
        isbn: Option<String>,

        /// Add even when an existing book looks like a duplicate
        #[arg(short, long)]
        force: bool,
    },

    /// List books, optionally filtered by a search query
    List {
        /// Show only books whose title, author, or ISBN contains this text
        query: Option<String>,

        /// Sort order (title, recent)
        #[arg(short, long, default_value = "title")]
        order: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Remove books from the collection by id
    Remove {
        /// Ids of the books to remove
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Add {
            title,
            author,
            isbn,
            force,
        } => {
            commands::add::run(&cli.dir, &title, &author, isbn.as_deref(), force)?;
        }
        Commands::List {
            query,
            order,
            format,
        } => {
            commands::list::run(&cli.dir, query.as_deref(), &order, &format)?;
        }
        Commands::Remove { ids } => {
            commands::remove::run(&cli.dir, &ids)?;
        }
        Commands::Version => {
            println!("BookShelf CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("BookShelf Core v{}", bookshelf_core::VERSION);
        }
    }

    Ok(())
}
