use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::query::{self, BookFilter};
use crate::store::DataStore;

use super::helpers::read_catalog;

/// Lists the books passing `filter`, with statistics for the whole library.
pub fn run<S: DataStore>(store: &S, scope: Scope, filter: &BookFilter) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let catalog = read_catalog(store, scope, &mut result)?;

    if catalog.is_empty() {
        result.add_message(CmdMessage::info("Your library is empty. Add some books!"));
        return Ok(result);
    }

    let listed = query::filter(catalog.all(), filter);
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No books match these filters."));
    }

    Ok(result
        .with_listed_books(listed)
        .with_stats(query::stats(catalog.all())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Genre, Rating, Status};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_library_has_no_stats() {
        let store = InMemoryStore::new();
        let result = run(&store, Scope::Project, &BookFilter::default()).unwrap();
        assert!(result.listed_books.is_empty());
        assert!(result.stats.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn lists_everything_without_filters() {
        let fixture = StoreFixture::new().with_books(3, Scope::Project);
        let result = run(&fixture.store, Scope::Project, &BookFilter::default()).unwrap();
        assert_eq!(result.listed_books.len(), 3);
        assert_eq!(result.listed_books[2].book.title, "Test Book 3");
    }

    #[test]
    fn stats_cover_whole_library_while_list_is_filtered() {
        let fixture = StoreFixture::new()
            .with_rated_book("Dune", Genre::Fiction, Status::Unread, 0, Scope::Project)
            .with_rated_book("Emma", Genre::Fiction, Status::Completed, 4, Scope::Project)
            .with_rated_book("SPQR", Genre::History, Status::Reading, 5, Scope::Project);

        let filter = BookFilter::new()
            .with_genres(vec![Genre::Fiction])
            .with_min_rating(Rating::new(1).unwrap());
        let result = run(&fixture.store, Scope::Project, &filter).unwrap();

        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].book.title, "Emma");
        let stats = result.stats.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_display(), "3.0");
    }

    #[test]
    fn reports_when_filters_match_nothing() {
        let fixture = StoreFixture::new().with_books(2, Scope::Project);
        let filter = BookFilter::new().with_statuses(vec![Status::OnHold]);
        let result = run(&fixture.store, Scope::Project, &filter).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books match these filters.");
    }
}
