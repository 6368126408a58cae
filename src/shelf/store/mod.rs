//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary between a [`Catalog`]
//! and its backing file. A catalog is always read and written as a whole:
//! there are no incremental updates.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - One JSON array per scope, `library_data.json` by default
//!   - Writes go to a temporary file that is renamed over the target, so a
//!     later load never observes a half-written catalog
//!
//! - [`memory::InMemoryStore`]: storage for tests
//!   - No persistence
//!   - Can be told to fail saves or loads to exercise error paths
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`]:
//! - `Scope::Project`: `.shelf/` under the current directory
//! - `Scope::Global`: user-wide data directory
//!
//! ## Storage Format
//!
//! ```text
//! .shelf/
//! ├── library_data.json   # All books (JSON array, insertion order)
//! └── config.json         # Scope configuration
//! ```
//!
//! [`Catalog`]: crate::catalog::Catalog

use crate::error::Result;
use crate::model::{Book, Scope};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Load every book in the scope. A missing catalog is an empty one.
    fn load(&self, scope: Scope) -> Result<Vec<Book>>;

    /// Replace the scope's catalog with `books`.
    fn save(&mut self, scope: Scope, books: &[Book]) -> Result<()>;

    /// Where the scope's catalog lives
    fn catalog_path(&self, scope: Scope) -> Result<PathBuf>;

    /// Move an unreadable catalog out of the way so the scope can start over.
    ///
    /// Returns the new location, or `None` when there was nothing to move.
    fn quarantine(&mut self, scope: Scope) -> Result<Option<PathBuf>>;
}
