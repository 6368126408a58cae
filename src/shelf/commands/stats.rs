use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::query::{self, BookFilter};
use crate::store::DataStore;

use super::helpers::read_catalog;

/// Statistics over the books passing `filter`.
pub fn run<S: DataStore>(store: &S, scope: Scope, filter: &BookFilter) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let catalog = read_catalog(store, scope, &mut result)?;
    let selected = query::filter(catalog.all(), filter);
    let stats = query::stats(selected.iter().map(|dp| &dp.book));
    Ok(result.with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Genre, Status};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn averages_two_ratings() {
        let f = StoreFixture::new()
            .with_rated_book("A", Genre::Fiction, Status::Completed, 3, Scope::Project)
            .with_rated_book("B", Genre::Mystery, Status::Reading, 5, Scope::Project);
        let stats = run(&f.store, Scope::Project, &BookFilter::default())
            .unwrap()
            .stats
            .unwrap();

        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.reading, 1);
        assert_eq!(stats.average_rating, 4.0);
    }

    #[test]
    fn honours_filter() {
        let f = StoreFixture::new()
            .with_rated_book("A", Genre::Fiction, Status::Completed, 3, Scope::Project)
            .with_rated_book("B", Genre::Mystery, Status::Reading, 5, Scope::Project);
        let filter = BookFilter::new().with_genres(vec![Genre::Mystery]);
        let stats = run(&f.store, Scope::Project, &filter).unwrap().stats.unwrap();

        assert_eq!(stats.total, 1);
        assert_eq!(stats.average_display(), "5.0");
    }

    #[test]
    fn empty_library_averages_zero() {
        let store = InMemoryStore::new();
        let stats = run(&store, Scope::Project, &BookFilter::default())
            .unwrap()
            .stats
            .unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_display(), "0.0");
    }
}
