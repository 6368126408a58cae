use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_selectors, BookSelector, DisplayBook, DisplayIndex};
use crate::model::Scope;
use crate::store::DataStore;
use tracing::info;

use super::helpers::{open_catalog, persist};

/// Removes every selected book with a single save.
///
/// All selectors are resolved against the catalog as it was before any
/// removal, so `delete 1 2` removes the first two books.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    selectors: &[BookSelector],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut editable = open_catalog(store, scope)?;

    let mut positions = resolve_selectors(&editable.catalog, selectors)?;
    positions.sort_unstable();
    positions.dedup();

    let mut removed = Vec::with_capacity(positions.len());
    for &pos in positions.iter().rev() {
        let book = editable.catalog.delete(pos)?;
        info!(index = pos + 1, title = %book.title, "book deleted");
        removed.push(DisplayBook {
            index: DisplayIndex::from_position(pos),
            book,
        });
    }
    removed.reverse();

    if persist(store, scope, &editable, &mut result) {
        for dp in &removed {
            result.add_message(CmdMessage::success(format!(
                "Book deleted ({}): {}",
                dp.index, dp.book.title
            )));
        }
    }
    result.affected_books = removed;
    Ok(result)
}
