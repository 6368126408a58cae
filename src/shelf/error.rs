use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("{0}")]
    Validation(String),

    #[error("Could not read {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("No book matches {0}")]
    NotFound(String),

    #[error("Index {index} is out of range (catalog has {len} books)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Api(String),
}

impl ShelfError {
    pub fn is_parse(&self) -> bool {
        matches!(self, ShelfError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
