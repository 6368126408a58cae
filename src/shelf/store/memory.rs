use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::{Book, Scope};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: HashMap<Scope, Vec<Book>>,
    corrupt: HashSet<Scope>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `save` fail with an I/O error (or succeed again).
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Make the next loads of `scope` fail as if its file were malformed,
    /// until the scope is quarantined.
    pub fn with_raw_corruption(mut self, scope: Scope) -> Self {
        self.corrupt.insert(scope);
        self
    }

    /// Number of successful saves, for asserting one write per mutation.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    fn virtual_path(scope: Scope) -> PathBuf {
        match scope {
            Scope::Project => PathBuf::from("memory://project/library_data.json"),
            Scope::Global => PathBuf::from("memory://global/library_data.json"),
        }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, scope: Scope) -> Result<Vec<Book>> {
        if self.corrupt.contains(&scope) {
            return Err(ShelfError::Parse {
                path: Self::virtual_path(scope),
                source: serde::de::Error::custom("simulated corruption"),
            });
        }
        Ok(self.books.get(&scope).cloned().unwrap_or_default())
    }

    fn save(&mut self, scope: Scope, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(ShelfError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.books.insert(scope, books.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn catalog_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(Self::virtual_path(scope))
    }

    fn quarantine(&mut self, scope: Scope) -> Result<Option<PathBuf>> {
        if !self.corrupt.remove(&scope) && !self.books.contains_key(&scope) {
            return Ok(None);
        }
        self.books.remove(&scope);
        Ok(Some(PathBuf::from(format!(
            "{}.corrupt",
            Self::virtual_path(scope).display()
        ))))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Genre, Rating, Status};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(&mut self, scope: Scope, book: Book) {
            let mut books = self.store.load(scope).unwrap();
            books.push(book);
            self.store.save(scope, &books).unwrap();
        }

        pub fn with_books(mut self, count: usize, scope: Scope) -> Self {
            for i in 0..count {
                let book = Book::new(format!("Test Book {}", i + 1), format!("Author {}", i + 1));
                self.push(scope, book);
            }
            self
        }

        pub fn with_book(mut self, book: Book, scope: Scope) -> Self {
            self.push(scope, book);
            self
        }

        pub fn with_rated_book(
            mut self,
            title: &str,
            genre: Genre,
            status: Status,
            rating: u8,
            scope: Scope,
        ) -> Self {
            let book = Book::new(title, "Some Author")
                .with_genre(genre)
                .with_status(status)
                .with_rating(Rating::new(rating).unwrap());
            self.push(scope, book);
            self
        }
    }
}
