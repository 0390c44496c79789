//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use directories::ProjectDirs;

use super::library_cmd;
use super::output::{Output, OutputFormat};
use crate::storage::LibraryStore;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about = "Local-first personal book catalog")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the library file
    #[arg(long, global = true, env = "BOOKSHELF_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// Publication year (1000-2100)
        year: i32,

        /// Genre
        genre: String,

        /// Mark the book as read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book whose title matches exactly
    Remove {
        /// Title of the book(s) to remove
        title: String,
    },

    /// Search books by title or author (case-insensitive substring)
    Search {
        /// Search query (omit to list everything)
        #[arg(default_value = "")]
        query: String,
    },

    /// List all books in the catalog
    List,

    /// Show read/unread statistics
    Stats,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let path = match cli.file {
        Some(path) => path,
        None => default_library_path()?,
    };
    output.verbose(&format!("Using library file: {}", path.display()));

    let store = LibraryStore::new(path);

    match cli.command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => library_cmd::add(&output, &store, &title, &author, year, &genre, read),
        Commands::Remove { title } => library_cmd::remove(&output, &store, &title),
        Commands::Search { query } => library_cmd::search(&output, &store, &query),
        Commands::List => library_cmd::list(&output, &store),
        Commands::Stats => library_cmd::stats(&output, &store),
    }
}

/// Default library location in the user data directory
fn default_library_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "bookshelf")
        .ok_or_else(|| anyhow::anyhow!("Could not determine a home directory"))?;
    Ok(dirs.data_dir().join("library.json"))
}
