use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Scope;
use crate::store::DataStore;
use tracing::warn;

/// Loads a catalog for reading.
///
/// A malformed file is reported and treated as empty, but left where it is:
/// only a change to the library moves it aside.
pub fn read_catalog<S: DataStore>(
    store: &S,
    scope: Scope,
    result: &mut CmdResult,
) -> Result<Catalog> {
    match store.load(scope) {
        Ok(books) => Ok(Catalog::from_books(books)),
        Err(err @ ShelfError::Parse { .. }) => {
            warn!(error = %err, "catalog unreadable, showing it as empty");
            result.add_message(CmdMessage::warning(format!(
                "{}. Showing an empty library; the file is kept until the next change.",
                err
            )));
            Ok(Catalog::new())
        }
        Err(err) => Err(err),
    }
}

/// A catalog loaded for a change, remembering whether its file was unreadable.
pub struct EditableCatalog {
    pub catalog: Catalog,
    unreadable: Option<ShelfError>,
}

/// Loads a catalog that is about to be changed.
///
/// A malformed file yields an empty catalog and stays where it is. It is only
/// moved aside by [`persist`], so a command that fails before saving leaves
/// the user's file untouched.
pub fn open_catalog<S: DataStore>(store: &S, scope: Scope) -> Result<EditableCatalog> {
    match store.load(scope) {
        Ok(books) => Ok(EditableCatalog {
            catalog: Catalog::from_books(books),
            unreadable: None,
        }),
        Err(err @ ShelfError::Parse { .. }) => {
            warn!(error = %err, "catalog unreadable, starting from an empty one");
            Ok(EditableCatalog {
                catalog: Catalog::new(),
                unreadable: Some(err),
            })
        }
        Err(err) => Err(err),
    }
}

/// Writes the catalog back. Returns whether the write happened.
///
/// An unreadable file is moved aside first, with a warning naming where it
/// went; if that fails nothing is written over it. A failed save is not rolled
/// back in memory; it becomes an error message on the result so the caller
/// still sees what was changed.
pub fn persist<S: DataStore>(
    store: &mut S,
    scope: Scope,
    editable: &EditableCatalog,
    result: &mut CmdResult,
) -> bool {
    if let Some(err) = &editable.unreadable {
        match store.quarantine(scope) {
            Ok(moved) => {
                let note = match moved {
                    Some(path) => format!(
                        "{}. It was moved to {} and a new, empty library was started.",
                        err,
                        path.display()
                    ),
                    None => format!("{}. Starting a new, empty library.", err),
                };
                result.add_message(CmdMessage::warning(note));
            }
            Err(qerr) => {
                warn!(error = %qerr, "could not move unreadable catalog aside");
                result.add_message(CmdMessage::error(format!(
                    "Changes were not saved: {} could not be moved aside ({})",
                    err, qerr
                )));
                return false;
            }
        }
    }

    match store.save(scope, editable.catalog.all()) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "catalog save failed");
            result.add_message(CmdMessage::error(format!(
                "Changes were not saved: {}",
                err
            )));
            false
        }
    }
}

/// Title and author are the only required fields.
pub fn validate_required(title: &str, author: &str) -> Result<()> {
    let mut missing = Vec::new();
    if title.trim().is_empty() {
        missing.push("Title");
    }
    if author.trim().is_empty() {
        missing.push("Author");
    }
    match missing.as_slice() {
        [] => Ok(()),
        [field] => Err(ShelfError::Validation(format!("{} is a required field!", field))),
        _ => Err(ShelfError::Validation(
            "Title and Author are required fields!".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn validation_names_missing_fields() {
        assert!(validate_required("Dune", "Herbert").is_ok());
        let err = validate_required("  ", "Herbert").unwrap_err();
        assert_eq!(err.to_string(), "Title is a required field!");
        let err = validate_required("", "").unwrap_err();
        assert_eq!(err.to_string(), "Title and Author are required fields!");
    }

    #[test]
    fn read_catalog_tolerates_corruption_without_moving_it() {
        let store = InMemoryStore::new().with_raw_corruption(Scope::Project);
        let mut result = CmdResult::default();

        let catalog = read_catalog(&store, Scope::Project, &mut result).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(result.messages.len(), 1);
        // still corrupt: nothing was quarantined
        assert!(store.load(Scope::Project).is_err());
    }

    #[test]
    fn open_catalog_leaves_corruption_until_persist() {
        let mut store = InMemoryStore::new().with_raw_corruption(Scope::Project);
        let mut editable = open_catalog(&store, Scope::Project).unwrap();
        assert!(editable.catalog.is_empty());
        assert!(store.load(Scope::Project).is_err());

        editable.catalog.add(Book::new("Dune", "Herbert"));
        let mut result = CmdResult::default();
        assert!(persist(&mut store, Scope::Project, &editable, &mut result));
        assert!(result.messages[0].content.contains("moved to"));
        assert_eq!(store.load(Scope::Project).unwrap().len(), 1);
    }

    #[test]
    fn persist_reports_failure_as_error_message() {
        let mut store = InMemoryStore::new();
        store.fail_saves(true);
        let mut result = CmdResult::default();
        let editable = open_catalog(&store, Scope::Project).unwrap();

        assert!(!persist(&mut store, Scope::Project, &editable, &mut result));
        assert!(result.has_errors());
    }
}
