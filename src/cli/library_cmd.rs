//! Library CLI commands
//!
//! Each command loads the library in full, applies one operation through
//! the store, and re-renders from the result.

use anyhow::Result;

use super::output::Output;
use crate::domain::{Book, Library};
use crate::storage::{LibraryStore, LoadStatus};

/// Loads the library, warning when corrupt content was discarded
fn load(output: &Output, store: &LibraryStore) -> Result<Library> {
    let (library, status) = store.load()?;
    match status {
        LoadStatus::Missing => output.verbose("No library file yet, starting empty"),
        LoadStatus::Loaded => {
            output.verbose(&format!("Loaded {} book(s)", library.len()));
        }
        LoadStatus::Recovered => {
            output.warn(&format!(
                "Could not parse {}; starting with an empty library",
                store.path().display()
            ));
        }
    }
    Ok(library)
}

pub fn add(
    output: &Output,
    store: &LibraryStore,
    title: &str,
    author: &str,
    year: i32,
    genre: &str,
    read: bool,
) -> Result<()> {
    let book = Book::new(title, author, year, genre, read)?;

    let mut library = load(output, store)?;
    store.add(&mut library, book.clone())?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "added": book,
            "total": library.len(),
        }));
    } else {
        output.success(&format!("Added '{}' by {}", book.title, book.author));
    }

    Ok(())
}

pub fn remove(output: &Output, store: &LibraryStore, title: &str) -> Result<()> {
    let mut library = load(output, store)?;
    let removed = store.remove(&mut library, title)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "removed": removed,
            "total": library.len(),
        }));
    } else if removed > 0 {
        output.success(&format!("Removed {} book(s) titled '{}'", removed, title));
    } else {
        output.success(&format!("No book titled '{}'", title));
        let titles = library.titles();
        if !titles.is_empty() {
            println!("Current titles: {}", titles.join(", "));
        }
    }

    Ok(())
}

pub fn search(output: &Output, store: &LibraryStore, query: &str) -> Result<()> {
    let library = load(output, store)?;
    let results = library.search(query);

    if output.is_json() {
        output.data(&results);
    } else if results.is_empty() {
        println!("No matching books found for '{}'", query);
    } else {
        print_table(&results);
        println!();
        println!("Found {} book(s)", results.len());
    }

    Ok(())
}

pub fn list(output: &Output, store: &LibraryStore) -> Result<()> {
    let library = load(output, store)?;

    if output.is_json() {
        output.data(&library);
    } else if library.is_empty() {
        println!("No books in the library yet");
    } else {
        let books: Vec<&Book> = library.iter().collect();
        print_table(&books);
        println!();
        println!("{} book(s) total", library.len());
    }

    Ok(())
}

pub fn stats(output: &Output, store: &LibraryStore) -> Result<()> {
    let library = load(output, store)?;
    let stats = library.stats();

    if output.is_json() {
        output.data(&stats);
    } else if stats.total == 0 {
        println!("No books in the library yet");
    } else {
        println!("Total books:  {}", stats.total);
        println!(
            "Books read:   {} ({:.2}%)",
            stats.read_count, stats.read_percentage
        );
        println!(
            "Books unread: {} ({:.2}%)",
            stats.unread_count,
            stats.unread_percentage()
        );
    }

    Ok(())
}

fn print_table(books: &[&Book]) {
    println!("{:<30} {:<20} {:<6} {:<12} STATUS", "TITLE", "AUTHOR", "YEAR", "GENRE");
    println!("{}", "-".repeat(78));
    for book in books {
        println!(
            "{:<30} {:<20} {:<6} {:<12} {}",
            book.title,
            book.author,
            book.year,
            book.genre,
            book.status_label()
        );
    }
}
