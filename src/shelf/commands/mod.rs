use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::index::DisplayBook;
use crate::model::{Genre, Rating, Scope, Status};
use crate::query::LibraryStats;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod paths;
pub mod search;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl ShelfPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| ShelfError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<DisplayBook>,
    pub listed_books: Vec<DisplayBook>,
    pub stats: Option<LibraryStats>,
    pub catalog_path: Option<PathBuf>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_catalog_path(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when something went wrong that the user must know about,
    /// such as a change that could not be saved.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Field changes for an existing book. `None` keeps the current value.
///
/// `date_added` is fixed at creation and has no field here.
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<Genre>,
    pub status: Option<Status>,
    pub rating: Option<Rating>,
    pub notes: Option<String>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.status.is_none()
            && self.rating.is_none()
            && self.notes.is_none()
    }
}
