//! Book record domain model
//!
//! A book is one catalog entry: title, author, publication year, genre and a
//! read flag. Field constraints are enforced at construction time; records
//! loaded from storage are trusted as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest accepted publication year
pub const YEAR_MIN: i32 = 1000;

/// Latest accepted publication year
pub const YEAR_MAX: i32 = 2100;

/// Validation failure when constructing a book
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("year {0} is outside the valid range {YEAR_MIN}-{YEAR_MAX}")]
    YearOutOfRange(i32),
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// Creates a validated book record
    ///
    /// `title`, `author` and `genre` must be non-empty (whitespace-only
    /// counts as empty) and `year` must fall within
    /// [`YEAR_MIN`]..=[`YEAR_MAX`].
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let author = author.into();
        let genre = genre.into();

        if title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if author.trim().is_empty() {
            return Err(ValidationError::EmptyField("author"));
        }
        if genre.trim().is_empty() {
            return Err(ValidationError::EmptyField("genre"));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }

        Ok(Self {
            title,
            author,
            year,
            genre,
            read,
        })
    }

    /// Returns a display label for the read status
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "read"
        } else {
            "unread"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_book() {
        let book = Book::new("Dune", "Herbert", 1965, "SciFi", true).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.year, 1965);
        assert!(book.read);
    }

    #[test]
    fn empty_fields_rejected() {
        assert_eq!(
            Book::new("", "Herbert", 1965, "SciFi", false),
            Err(ValidationError::EmptyField("title"))
        );
        assert_eq!(
            Book::new("Dune", "", 1965, "SciFi", false),
            Err(ValidationError::EmptyField("author"))
        );
        assert_eq!(
            Book::new("Dune", "Herbert", 1965, "", false),
            Err(ValidationError::EmptyField("genre"))
        );
        // Whitespace-only is empty too
        assert_eq!(
            Book::new("   ", "Herbert", 1965, "SciFi", false),
            Err(ValidationError::EmptyField("title"))
        );
    }

    #[test]
    fn year_boundaries() {
        assert!(Book::new("A", "B", YEAR_MIN, "C", false).is_ok());
        assert!(Book::new("A", "B", YEAR_MAX, "C", false).is_ok());
        assert_eq!(
            Book::new("A", "B", YEAR_MIN - 1, "C", false),
            Err(ValidationError::YearOutOfRange(999))
        );
        assert_eq!(
            Book::new("A", "B", YEAR_MAX + 1, "C", false),
            Err(ValidationError::YearOutOfRange(2101))
        );
    }

    #[test]
    fn json_round_trip() {
        let book = Book::new("Dune", "Herbert", 1965, "SciFi", true).unwrap();
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }
}
