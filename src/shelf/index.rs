//! # Display Indexes
//!
//! Books have no stored identifier; the on-disk layout is just the seven
//! record fields. Users pick books by their **display index**, the 1-based
//! position in the catalog as shown by `list`, or by title.
//!
//! A title selector must name the whole title, ignoring case. Two books may
//! share a title, in which case the first one in catalog order wins, so
//! indexes are the reliable way to address a specific record.
//!
//! Indexes shift when an earlier book is deleted. Commands that take several
//! selectors resolve all of them against the same snapshot before mutating.

use crate::catalog::Catalog;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// The 0-based catalog position this index refers to.
    pub fn position(&self) -> usize {
        self.0.saturating_sub(1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index: {}", s)),
        }
    }
}

/// A user input to select a book, either by its index or by its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSelector {
    Index(DisplayIndex),
    Title(String),
}

impl fmt::Display for BookSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSelector::Index(idx) => write!(f, "{}", idx),
            BookSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBook {
    pub index: DisplayIndex,
    #[serde(flatten)]
    pub book: Book,
}

/// Pairs every book with its display index, in catalog order.
pub fn index_books(books: &[Book]) -> Vec<DisplayBook> {
    books
        .iter()
        .enumerate()
        .map(|(pos, book)| DisplayBook {
            index: DisplayIndex::from_position(pos),
            book: book.clone(),
        })
        .collect()
}

/// Finds the catalog position a selector points at.
pub fn resolve_selector(catalog: &Catalog, selector: &BookSelector) -> Result<usize> {
    match selector {
        BookSelector::Index(idx) => {
            if idx.0 == 0 || idx.0 > catalog.len() {
                return Err(ShelfError::NotFound(format!(
                    "index {} (catalog has {} books)",
                    idx,
                    catalog.len()
                )));
            }
            Ok(idx.position())
        }
        BookSelector::Title(term) => catalog
            .find_by_title(term)
            .ok_or_else(|| ShelfError::NotFound(selector.to_string())),
    }
}

/// Resolves every selector or none: the first miss is returned as an error.
pub fn resolve_selectors(catalog: &Catalog, selectors: &[BookSelector]) -> Result<Vec<usize>> {
    selectors
        .iter()
        .map(|s| resolve_selector(catalog, s))
        .collect()
}
