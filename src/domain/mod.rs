//! Domain model for the book catalog

mod book;
mod library;

pub use book::{Book, ValidationError, YEAR_MAX, YEAR_MIN};
pub use library::{Library, Stats};
