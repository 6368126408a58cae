use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{resolve_selectors, BookSelector, DisplayBook, DisplayIndex};
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::read_catalog;

pub fn run<S: DataStore>(store: &S, scope: Scope, selectors: &[BookSelector]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let catalog = read_catalog(store, scope, &mut result)?;
    let positions = resolve_selectors(&catalog, selectors)?;

    let listed = positions
        .into_iter()
        .filter_map(|pos| {
            catalog.get(pos).map(|book| DisplayBook {
                index: DisplayIndex::from_position(pos),
                book: book.clone(),
            })
        })
        .collect();
    Ok(result.with_listed_books(listed))
}
