use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayBook, DisplayIndex};
use crate::model::{Book, Scope};
use crate::store::DataStore;
use tracing::info;

use super::helpers::{open_catalog, persist, validate_required};

pub fn run<S: DataStore>(store: &mut S, scope: Scope, book: Book) -> Result<CmdResult> {
    validate_required(&book.title, &book.author)?;

    let mut result = CmdResult::default();
    let mut editable = open_catalog(store, scope)?;
    let position = editable.catalog.add(book.clone());
    let index = DisplayIndex::from_position(position);
    info!(%index, title = %book.title, "book added");

    if persist(store, scope, &editable, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Book added ({}): {}",
            index, book.title
        )));
    }
    result.affected_books.push(DisplayBook { index, book });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::{Genre, Rating, Status};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_and_persists() {
        let mut store = InMemoryStore::new();
        let dune = Book::new("Dune", "Herbert");
        run(&mut store, Scope::Project, Book::new("First", "Someone")).unwrap();
        let result = run(&mut store, Scope::Project, dune.clone()).unwrap();

        assert_eq!(result.affected_books[0].index, DisplayIndex(2));
        let stored = store.load(Scope::Project).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1], dune);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn keeps_every_field() {
        let mut store = InMemoryStore::new();
        let book = Book::new("Dune", "Herbert")
            .with_genre(Genre::ScienceFiction)
            .with_status(Status::Reading)
            .with_rating(Rating::new(4).unwrap())
            .with_notes("spice");
        run(&mut store, Scope::Global, book.clone()).unwrap();

        assert_eq!(store.load(Scope::Global).unwrap(), vec![book]);
        assert!(store.load(Scope::Project).unwrap().is_empty());
    }

    #[test]
    fn rejects_missing_author_without_mutation() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, Scope::Project, Book::new("Dune", "")).unwrap_err();

        assert!(matches!(err, ShelfError::Validation(_)));
        assert!(store.load(Scope::Project).unwrap().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_failure_keeps_result_and_reports_error() {
        let mut store = InMemoryStore::new();
        store.fail_saves(true);
        let result = run(&mut store, Scope::Project, Book::new("Dune", "Herbert")).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.affected_books.len(), 1);
        assert!(store.load(Scope::Project).unwrap().is_empty());
    }

    #[test]
    fn recovers_from_corrupt_catalog() {
        let mut store = InMemoryStore::new().with_raw_corruption(Scope::Project);
        let result = run(&mut store, Scope::Project, Book::new("Dune", "Herbert")).unwrap();

        assert!(!result.has_errors());
        assert!(result.messages[0].content.contains("moved to"));
        assert_eq!(store.load(Scope::Project).unwrap().len(), 1);
    }
}
