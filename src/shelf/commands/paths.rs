use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let path = store.catalog_path(scope)?;
    Ok(CmdResult::default().with_catalog_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_scope_catalog_path() {
        let store = InMemoryStore::new();
        let project = run(&store, Scope::Project).unwrap().catalog_path.unwrap();
        let global = run(&store, Scope::Global).unwrap().catalog_path.unwrap();
        assert_ne!(project, global);
        assert!(project.to_string_lossy().ends_with("library_data.json"));
    }
}
