//! Library collection
//!
//! The library is an ordered sequence of book records; insertion order is
//! the only ordering and duplicates by title are permitted. All transforms
//! here are pure linear scans, persistence lives in the storage layer.

use serde::{Deserialize, Serialize};

use super::book::Book;

/// The ordered collection of all book records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library(Vec<Book>);

impl Library {
    /// Creates an empty library
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a book, preserving insertion order
    pub fn push(&mut self, book: Book) {
        self.0.push(book);
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the library holds no records
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.0.iter()
    }

    /// Removes every record whose title exactly matches (case-sensitive)
    ///
    /// Returns the number of records removed; zero matches is a no-op, not
    /// an error.
    pub fn remove_title(&mut self, title: &str) -> usize {
        let len_before = self.0.len();
        self.0.retain(|book| book.title != title);
        len_before - self.0.len()
    }

    /// Case-insensitive substring search against title or author
    ///
    /// Matches are returned in insertion order. The empty query matches
    /// every record.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.0
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&query)
                    || book.author.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Distinct titles in first-seen order
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = Vec::new();
        for book in &self.0 {
            if !titles.contains(&book.title.as_str()) {
                titles.push(&book.title);
            }
        }
        titles
    }

    /// Summarizes read/unread counts over the collection
    pub fn stats(&self) -> Stats {
        let total = self.0.len();
        let read_count = self.0.iter().filter(|book| book.read).count();
        let unread_count = total - read_count;

        let read_percentage = if total == 0 {
            0.0
        } else {
            read_count as f64 / total as f64 * 100.0
        };

        Stats {
            total,
            read_count,
            unread_count,
            read_percentage,
        }
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Read/unread summary of a library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub read_count: usize,
    pub unread_count: usize,
    pub read_percentage: f64,
}

impl Stats {
    /// Percentage of unread books, the complement of `read_percentage`
    pub fn unread_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 - self.read_percentage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, read: bool) -> Book {
        Book::new(title, author, 2000, "Fiction", read).unwrap()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut library = Library::new();
        library.push(book("B", "x", false));
        library.push(book("A", "y", false));
        library.push(book("C", "z", false));

        let titles: Vec<_> = library.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn remove_title_removes_all_matches() {
        let mut library = Library::new();
        library.push(book("X", "a", false));
        library.push(book("Y", "b", false));
        library.push(book("X", "c", false));

        assert_eq!(library.remove_title("X"), 2);
        assert_eq!(library.len(), 1);
        assert_eq!(library.iter().next().unwrap().title, "Y");
    }

    #[test]
    fn remove_title_no_match_is_noop() {
        let mut library = Library::new();
        library.push(book("X", "a", false));

        let before = library.clone();
        assert_eq!(library.remove_title("Z"), 0);
        assert_eq!(library, before);
    }

    #[test]
    fn remove_title_is_case_sensitive() {
        let mut library = Library::new();
        library.push(book("Dune", "Herbert", false));

        assert_eq!(library.remove_title("dune"), 0);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut library = Library::new();
        library.push(book("The Hobbit", "Tolkien", true));
        library.push(book("Dune", "Herbert", false));

        let results = library.search("tolkien");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Hobbit");
    }

    #[test]
    fn search_matches_author_substring() {
        let mut library = Library::new();
        library.push(book("Dune", "Herbert", false));

        let results = library.search("her");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dune");
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let mut library = Library::new();
        library.push(book("B", "x", false));
        library.push(book("A", "y", false));

        let results = library.search("");
        let titles: Vec<_> = results.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn search_no_match_returns_empty() {
        let mut library = Library::new();
        library.push(book("Dune", "Herbert", false));

        assert!(library.search("tolkien").is_empty());
    }

    #[test]
    fn titles_are_distinct_first_seen_order() {
        let mut library = Library::new();
        library.push(book("X", "a", false));
        library.push(book("Y", "b", false));
        library.push(book("X", "c", false));

        assert_eq!(library.titles(), ["X", "Y"]);
    }

    #[test]
    fn stats_on_empty_library() {
        let stats = Library::new().stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.read_count, 0);
        assert_eq!(stats.unread_count, 0);
        assert_eq!(stats.read_percentage, 0.0);
        assert_eq!(stats.unread_percentage(), 0.0);
    }

    #[test]
    fn stats_counts_read_books() {
        let mut library = Library::new();
        library.push(book("A", "x", true));
        library.push(book("B", "y", true));
        library.push(book("C", "z", false));

        let stats = library.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.read_count, 2);
        assert_eq!(stats.unread_count, 1);
        assert!((stats.read_percentage - 66.666).abs() < 0.01);
        assert!((stats.unread_percentage() - 33.333).abs() < 0.01);
    }
}
