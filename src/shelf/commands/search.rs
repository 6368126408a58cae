use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Scope, SearchField};
use crate::query;
use crate::store::DataStore;

use super::helpers::read_catalog;

pub fn run<S: DataStore>(
    store: &S,
    scope: Scope,
    term: &str,
    field: SearchField,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if term.is_empty() {
        result.add_message(CmdMessage::info("Enter a search term"));
        return Ok(result);
    }

    let catalog = read_catalog(store, scope, &mut result)?;
    let matches = query::search(catalog.all(), term, field);

    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found matching your search."));
    } else {
        let noun = if matches.len() == 1 { "result" } else { "results" };
        result.add_message(CmdMessage::info(format!(
            "Found {} {}:",
            matches.len(),
            noun
        )));
    }

    Ok(result.with_listed_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_book(Book::new("Dune", "Frank Herbert"), Scope::Project)
            .with_book(
                Book::new("Emma", "Jane Austen").with_notes("Reread for book club"),
                Scope::Project,
            )
            .with_book(Book::new("Dune Messiah", "Frank Herbert"), Scope::Project)
    }

    #[test]
    fn finds_title_case_insensitively() {
        let f = fixture();
        let result = run(&f.store, Scope::Project, "dun", SearchField::Title).unwrap();
        let titles: Vec<_> = result
            .listed_books
            .iter()
            .map(|dp| dp.book.title.as_str())
            .collect();
        assert_eq!(titles, ["Dune", "Dune Messiah"]);
        assert_eq!(result.messages[0].content, "Found 2 results:");
    }

    #[test]
    fn searches_author_and_notes() {
        let f = fixture();
        let by_author = run(&f.store, Scope::Project, "austen", SearchField::Author).unwrap();
        assert_eq!(by_author.listed_books.len(), 1);

        let by_notes = run(&f.store, Scope::Project, "CLUB", SearchField::Notes).unwrap();
        assert_eq!(by_notes.listed_books[0].book.title, "Emma");
    }

    #[test]
    fn empty_term_runs_no_search() {
        let f = fixture();
        let result = run(&f.store, Scope::Project, "", SearchField::Title).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "Enter a search term");
    }

    #[test]
    fn no_hits_is_reported() {
        let f = fixture();
        let result = run(&f.store, Scope::Project, "tolstoy", SearchField::Author).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No books found matching your search."
        );
    }
}
