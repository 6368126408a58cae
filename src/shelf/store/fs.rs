use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::{Book, Scope};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "library_data.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    fn get_store_path(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                ShelfError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self, scope: Scope) -> Result<Vec<Book>> {
        let data_file = self.catalog_path(scope)?;
        if !data_file.exists() {
            debug!(path = %data_file.display(), "no catalog file yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&data_file).map_err(ShelfError::Io)?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|source| ShelfError::Parse {
                path: data_file.clone(),
                source,
            })?;
        debug!(path = %data_file.display(), count = books.len(), "catalog loaded");
        Ok(books)
    }

    fn save(&mut self, scope: Scope, books: &[Book]) -> Result<()> {
        let root = self.get_store_path(scope)?;
        self.ensure_dir(&root)?;

        let data_file = root.join(&self.data_file);
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;

        // Atomic write
        let tmp_file = root.join(format!(".library-{}.tmp", Uuid::new_v4()));
        if let Err(e) = write_then_rename(&tmp_file, &data_file, content.as_bytes()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(e));
        }

        info!(path = %data_file.display(), count = books.len(), "catalog saved");
        Ok(())
    }

    fn catalog_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(self.get_store_path(scope)?.join(&self.data_file))
    }

    fn quarantine(&mut self, scope: Scope) -> Result<Option<PathBuf>> {
        let data_file = self.catalog_path(scope)?;
        if !data_file.exists() {
            return Ok(None);
        }

        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let mut target = data_file.clone();
        target.set_file_name(format!("{}.corrupt-{}", self.data_file, stamp));
        fs::rename(&data_file, &target).map_err(ShelfError::Io)?;

        warn!(
            from = %data_file.display(),
            to = %target.display(),
            "moved unreadable catalog aside"
        );
        Ok(Some(target))
    }
}

/// Writes `content` to `tmp` and renames it over `target`. On error the
/// caller removes `tmp`, which may be partially written.
fn write_then_rename(tmp: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    fs::write(tmp, content)?;
    fs::rename(tmp, target)
}
