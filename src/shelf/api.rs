//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every shelf operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw selector strings into [`BookSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O on stdout/stderr and no formatting.
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::index::{BookSelector, DisplayIndex};
use crate::model::{Book, Scope, SearchField};
use crate::query::BookFilter;
use crate::store::DataStore;
use std::str::FromStr;

/// The main API facade for shelf operations.
pub struct ShelfApi<S: DataStore> {
    store: S,
    paths: commands::ShelfPaths,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S, paths: commands::ShelfPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_book(&mut self, scope: Scope, book: Book) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, scope, book)
    }

    pub fn list_books(&self, scope: Scope, filter: &BookFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, scope, filter)
    }

    pub fn search_books(
        &self,
        scope: Scope,
        term: &str,
        field: SearchField,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, scope, term, field)
    }

    pub fn view_books<I: AsRef<str>>(
        &self,
        scope: Scope,
        inputs: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.store, scope, &selectors)
    }

    /// Updates one book. Several inputs are read as one multi-word title.
    pub fn update_book<I: AsRef<str>>(
        &mut self,
        scope: Scope,
        inputs: &[I],
        update: &commands::BookUpdate,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        let selector = match selectors.as_slice() {
            [one] => one.clone(),
            _ => {
                return Err(ShelfError::Api(
                    "Edit one book at a time".to_string(),
                ))
            }
        };
        commands::update::run(&mut self.store, scope, &selector, update)
    }

    pub fn delete_books<I: AsRef<str>>(
        &mut self,
        scope: Scope,
        inputs: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::delete::run(&mut self.store, scope, &selectors)
    }

    pub fn stats(&self, scope: Scope, filter: &BookFilter) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, scope, filter)
    }

    pub fn catalog_path(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, scope)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<BookSelector>> {
    if inputs.is_empty() {
        return Err(ShelfError::Api("No book selected".to_string()));
    }

    // 1. Every input an index: select each
    let all_indexes: std::result::Result<Vec<DisplayIndex>, _> = inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()))
        .collect();

    if let Ok(indexes) = all_indexes {
        return Ok(indexes.into_iter().map(BookSelector::Index).collect());
    }

    // 2. Otherwise the words form one title
    let title = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    Ok(vec![BookSelector::Title(title)])
}

pub use crate::commands::config::ConfigAction;
pub use crate::query::LibraryStats;
pub use commands::{BookUpdate, CmdMessage, CmdResult, MessageLevel, ShelfPaths};
