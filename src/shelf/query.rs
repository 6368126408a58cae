//! Read-only queries over a catalog snapshot: filtering, text search and
//! summary statistics.
//!
//! Every function returns books in catalog order, tagged with their display
//! index so results can be fed straight back into edit/delete commands.

use crate::index::{index_books, DisplayBook};
use crate::model::{Book, Genre, Rating, SearchField, Status};
use serde::Serialize;

/// Field-membership filter. Empty sets do not filter; all criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub genres: Vec<Genre>,
    pub statuses: Vec<Status>,
    pub min_rating: Rating,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_statuses(mut self, statuses: Vec<Status>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_min_rating(mut self, min_rating: Rating) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn matches(&self, book: &Book) -> bool {
        (self.genres.is_empty() || self.genres.contains(&book.genre))
            && (self.statuses.is_empty() || self.statuses.contains(&book.status))
            && book.rating >= self.min_rating
    }
}

pub fn filter(books: &[Book], filter: &BookFilter) -> Vec<DisplayBook> {
    index_books(books)
        .into_iter()
        .filter(|dp| filter.matches(&dp.book))
        .collect()
}

/// Case-insensitive substring search on one field.
///
/// An empty term is not a query and yields nothing. Books with empty notes
/// never match a notes search.
pub fn search(books: &[Book], term: &str, field: SearchField) -> Vec<DisplayBook> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    index_books(books)
        .into_iter()
        .filter(|dp| {
            let haystack = match field {
                SearchField::Title => &dp.book.title,
                SearchField::Author => &dp.book.author,
                SearchField::Notes => &dp.book.notes,
            };
            !haystack.is_empty() && haystack.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    pub completed: usize,
    pub reading: usize,
    /// Mean rating; 0.0 for an empty set.
    pub average_rating: f64,
}

impl LibraryStats {
    /// The average as shown to users, one decimal place.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

pub fn stats<'a, I>(books: I) -> LibraryStats
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut out = LibraryStats::default();
    let mut rating_sum: u64 = 0;

    for book in books {
        out.total += 1;
        rating_sum += u64::from(book.rating.value());
        match book.status {
            Status::Completed => out.completed += 1,
            Status::Reading => out.reading += 1,
            _ => {}
        }
    }

    if out.total > 0 {
        out.average_rating = rating_sum as f64 / out.total as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;

    fn book(title: &str, genre: Genre, status: Status, rating: u8) -> Book {
        Book::new(title, "Author")
            .with_genre(genre)
            .with_status(status)
            .with_rating(Rating::new(rating).unwrap())
    }

    fn library() -> Vec<Book> {
        vec![
            book("Dune", Genre::Fiction, Status::Unread, 0),
            book("Foundation", Genre::ScienceFiction, Status::Completed, 5),
            book("Gone Girl", Genre::Mystery, Status::Reading, 3),
            book("Sapiens", Genre::NonFiction, Status::Completed, 4)
                .with_notes("Recommended by Sam"),
        ]
    }

    fn titles(found: &[DisplayBook]) -> Vec<&str> {
        found.iter().map(|dp| dp.book.title.as_str()).collect()
    }

    #[test]
    fn default_filter_is_identity() {
        let books = library();
        let found = filter(&books, &BookFilter::default());
        assert_eq!(found.len(), books.len());
        assert_eq!(titles(&found), ["Dune", "Foundation", "Gone Girl", "Sapiens"]);
    }

    #[test]
    fn filters_by_genre() {
        let books = library();
        let found = filter(&books, &BookFilter::new().with_genres(vec![Genre::Fiction]));
        assert_eq!(titles(&found), ["Dune"]);
        assert_eq!(found[0].index, DisplayIndex(1));
    }

    #[test]
    fn filters_compose_conjunctively() {
        let books = library();
        let f = BookFilter::new()
            .with_statuses(vec![Status::Completed])
            .with_min_rating(Rating::new(5).unwrap());
        let found = filter(&books, &f);
        assert_eq!(titles(&found), ["Foundation"]);
        assert_eq!(found[0].index, DisplayIndex(2));
    }

    #[test]
    fn genre_set_is_a_membership_test() {
        let books = library();
        let f = BookFilter::new().with_genres(vec![Genre::Mystery, Genre::NonFiction]);
        assert_eq!(titles(&filter(&books, &f)), ["Gone Girl", "Sapiens"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let books = library();
        let found = search(&books, "dun", SearchField::Title);
        assert_eq!(titles(&found), ["Dune"]);

        let found = search(&books, "DUNE", SearchField::Title);
        assert_eq!(titles(&found), ["Dune"]);
    }

    #[test]
    fn search_by_notes_skips_empty_notes() {
        let books = library();
        assert_eq!(titles(&search(&books, "sam", SearchField::Notes)), ["Sapiens"]);
        assert_eq!(titles(&search(&books, "e", SearchField::Notes)), ["Sapiens"]);
    }

    #[test]
    fn search_without_hits_or_term_is_empty() {
        let books = library();
        assert!(search(&books, "zzz", SearchField::Author).is_empty());
        assert!(search(&books, "", SearchField::Title).is_empty());
    }

    #[test]
    fn stats_average_two_books() {
        let books = vec![
            book("A", Genre::Other, Status::Unread, 3),
            book("B", Genre::Other, Status::Unread, 5),
        ];
        let s = stats(&books);
        assert_eq!(s.total, 2);
        assert_eq!(s.average_rating, 4.0);
        assert_eq!(s.average_display(), "4.0");
    }

    #[test]
    fn stats_counts_statuses() {
        let s = stats(&library());
        assert_eq!(s.total, 4);
        assert_eq!(s.completed, 2);
        assert_eq!(s.reading, 1);
        assert_eq!(s.average_display(), "3.0");
    }

    #[test]
    fn stats_of_nothing_is_zero() {
        let s = stats(&Vec::<Book>::new());
        assert_eq!(s.total, 0);
        assert_eq!(s.average_rating, 0.0);
        assert_eq!(s.average_display(), "0.0");
    }
}
