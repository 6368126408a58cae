use crate::commands::{BookUpdate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_selector, BookSelector, DisplayBook, DisplayIndex};
use crate::model::Scope;
use crate::store::DataStore;
use tracing::info;

use super::helpers::{open_catalog, persist, validate_required};

/// Applies `update` to the selected book and saves.
///
/// Fields left as `None` keep their current value; `date_added` never changes.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    selector: &BookSelector,
    update: &BookUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut editable = open_catalog(store, scope)?;
    let position = resolve_selector(&editable.catalog, selector)?;
    let index = DisplayIndex::from_position(position);

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for book {}",
            index
        )));
        return Ok(result);
    }

    let mut book = editable.catalog.all()[position].clone();
    if let Some(title) = &update.title {
        book.title = title.clone();
    }
    if let Some(author) = &update.author {
        book.author = author.clone();
    }
    if let Some(genre) = update.genre {
        book.genre = genre;
    }
    if let Some(status) = update.status {
        book.status = status;
    }
    if let Some(rating) = update.rating {
        book.rating = rating;
    }
    if let Some(notes) = &update.notes {
        book.notes = notes.clone();
    }
    validate_required(&book.title, &book.author)?;

    let book = editable.catalog.update(position, book)?.clone();
    info!(%index, title = %book.title, "book updated");

    if persist(store, scope, &editable, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Book updated ({}): {}",
            index, book.title
        )));
    }
    result.affected_books.push(DisplayBook { index, book });
    Ok(result)
}
