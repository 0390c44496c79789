//! JSON file storage for the library
//!
//! The library is stored as a pretty-printed JSON array of book objects.
//! Every mutation rewrites the whole file; every load reads it in full.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{Book, Library};

/// How a load resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The store file does not exist yet (first run)
    Missing,
    /// The file was read and parsed
    Loaded,
    /// The file exists but could not be parsed; fell back to an empty
    /// library
    Recovered,
}

/// Store for the book collection as a single JSON file
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full library from the store
    ///
    /// A missing file yields an empty library (`Missing`). Content that
    /// cannot be parsed as a book array also yields an empty library
    /// (`Recovered`) rather than an error; this is the store's named
    /// fallback policy for corrupt content. Other I/O failures propagate.
    pub fn load(&self) -> Result<(Library, LoadStatus)> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok((Library::new(), LoadStatus::Missing));
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read library store: {}", self.path.display())
                });
            }
        };

        match serde_json::from_str(&content) {
            Ok(library) => Ok((library, LoadStatus::Loaded)),
            Err(_) => Ok((Library::new(), LoadStatus::Recovered)),
        }
    }

    /// Writes the full library to the store (atomic full rewrite)
    pub fn save(&self, library: &Library) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(library).context("Failed to serialize library")?;
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Appends a book and persists the new state
    ///
    /// The in-memory library is only updated after the save succeeds; on
    /// failure it is left exactly as it was. The book is assumed already
    /// validated by [`Book::new`].
    pub fn add(&self, library: &mut Library, book: Book) -> Result<()> {
        let mut next = library.clone();
        next.push(book);
        self.save(&next)?;
        *library = next;
        Ok(())
    }

    /// Removes every book whose title exactly matches and persists
    ///
    /// Returns the number of records removed. Zero matches still saves the
    /// (unchanged) collection, matching the original tool's behavior. The
    /// in-memory library is only updated after the save succeeds.
    pub fn remove(&self, library: &mut Library, title: &str) -> Result<usize> {
        let mut next = library.clone();
        let removed = next.remove_title(title);
        self.save(&next)?;
        *library = next;
        Ok(removed)
    }
}
