//! Bookshelf - A local-first personal book catalog CLI
//!
//! Bookshelf keeps a small collection of book records in a single JSON file
//! and exposes add/remove/search/list/stats operations over it. The
//! [`storage::LibraryStore`] is the single source of truth for the
//! collection; the CLI re-renders from its results after every call.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Book, Library, Stats, ValidationError};
pub use storage::{LibraryStore, LoadStatus};
