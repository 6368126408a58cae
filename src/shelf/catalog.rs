//! The in-memory catalog: an ordered sequence of [`Book`] records.
//!
//! Insertion order is display and search order. A `Catalog` knows nothing
//! about persistence; the command layer saves it after each mutation.

use crate::error::{Result, ShelfError};
use crate::model::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Append a book, returning its position.
    pub fn add(&mut self, book: Book) -> usize {
        self.books.push(book);
        self.books.len() - 1
    }

    /// Replace the book at `index`. The stored `date_added` always wins over
    /// whatever the replacement carries.
    pub fn update(&mut self, index: usize, mut book: Book) -> Result<&Book> {
        let len = self.books.len();
        let slot = self
            .books
            .get_mut(index)
            .ok_or(ShelfError::IndexOutOfRange { index, len })?;
        book.date_added = slot.date_added;
        *slot = book;
        Ok(slot)
    }

    pub fn delete(&mut self, index: usize) -> Result<Book> {
        if index >= self.books.len() {
            return Err(ShelfError::IndexOutOfRange {
                index,
                len: self.books.len(),
            });
        }
        Ok(self.books.remove(index))
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Position of the first book whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        let wanted = title.trim().to_lowercase();
        self.books
            .iter()
            .position(|b| b.title.trim().to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Genre, Rating, Status};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog_of(titles: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for t in titles {
            catalog.add(Book::new(*t, "Someone"));
        }
        catalog
    }

    #[test]
    fn add_appends_in_order() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add(Book::new("A", "x")), 0);
        assert_eq!(catalog.add(Book::new("B", "y")), 1);
        let titles: Vec<_> = catalog.all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn update_preserves_date_added() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Herbert").with_date_added(date(2020, 1, 2)));

        let replacement = Book::new("Dune Messiah", "Frank Herbert")
            .with_genre(Genre::ScienceFiction)
            .with_status(Status::Completed)
            .with_rating(Rating::new(5).unwrap())
            .with_date_added(date(2030, 12, 31));
        let updated = catalog.update(0, replacement).unwrap().clone();

        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.status, Status::Completed);
        assert_eq!(updated.date_added, date(2020, 1, 2));
        assert_eq!(catalog.get(0), Some(&updated));
    }

    #[test]
    fn update_rejects_invalid_index() {
        let mut catalog = catalog_of(&["A"]);
        let err = catalog.update(1, Book::new("B", "y")).unwrap_err();
        assert!(matches!(
            err,
            ShelfError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut catalog = catalog_of(&["A", "B", "C", "D"]);
        let removed = catalog.delete(1).unwrap();

        assert_eq!(removed.title, "B");
        assert_eq!(catalog.len(), 3);
        let titles: Vec<_> = catalog.all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "C", "D"]);
    }

    #[test]
    fn delete_out_of_range_leaves_catalog_alone() {
        let mut catalog = catalog_of(&["A"]);
        assert!(catalog.delete(3).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn find_by_title_returns_first_match() {
        let catalog = catalog_of(&["Twin", "Other", "Twin"]);
        assert_eq!(catalog.find_by_title("Twin"), Some(0));
        assert_eq!(catalog.find_by_title("twin"), Some(0));
        assert_eq!(catalog.find_by_title("Twi"), None);
    }
}
