//! # Storage Layer
//!
//! Persistence layer for the book catalog.
//!
//! ## Storage Format
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Library | JSON array of book objects | `library.json` (configurable) |
//!
//! The whole collection is rewritten on every mutation; there is no
//! append-only or incremental format at this scale. Writes are atomic
//! (temp file + rename). There is no file locking: the store assumes
//! exclusive single-process access, and concurrent writers are
//! last-writer-wins.
//!
//! ## Key Types
//!
//! - [`LibraryStore`] - Load/save the library as a JSON file
//! - [`LoadStatus`] - How the last load resolved (missing file and corrupt
//!   content both fall back to an empty library)

mod json;

pub use json::{LibraryStore, LoadStatus};
