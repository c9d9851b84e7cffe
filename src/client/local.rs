//! Local backend: file-persisted fallback with the same CRUD semantics.
//!
//! The in-memory [`IdeaStore`] is the single source of truth; the whole
//! array is rewritten to one named JSON file after every mutation, the way
//! the browser fallback rewrote its single local-storage entry.

use std::fs;
use std::path::PathBuf;

use crate::entity::Idea;
use crate::error::Result;
use crate::storage::{IdeaPatch, IdeaStore, NewIdea};

#[derive(Debug)]
pub struct LocalBackend {
    store: IdeaStore,
    path: PathBuf,
}

impl LocalBackend {
    /// Open the backing file, recovering to an empty store when it is
    /// absent or does not hold an idea array.
    pub fn open(path: PathBuf) -> Self {
        let store = match fs::read_to_string(&path) {
            Ok(raw) => {
                let ideas: Vec<Idea> = serde_json::from_str(&raw).unwrap_or_default();
                IdeaStore::from_records(ideas)
            }
            Err(_) => IdeaStore::new(),
        };
        Self { store, path }
    }

    pub fn list(&self) -> Vec<Idea> {
        self.store.list().to_vec()
    }

    pub fn get(&self, id: u64) -> Result<Idea> {
        self.store.get(id).cloned()
    }

    pub fn create(&mut self, new: NewIdea) -> Result<Idea> {
        let idea = self.store.create(new)?;
        self.persist()?;
        Ok(idea)
    }

    pub fn update(&mut self, id: u64, patch: IdeaPatch) -> Result<Idea> {
        let idea = self.store.update(id, patch)?;
        self.persist()?;
        Ok(idea)
    }

    pub fn delete(&mut self, id: u64) -> Result<Idea> {
        let idea = self.store.delete(id)?;
        self.persist()?;
        Ok(idea)
    }

    /// Rewrite the whole array, creating parent directories on first use.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(self.store.list())?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mutations_persist_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ideas.json");

        let mut backend = LocalBackend::open(path.clone());
        backend
            .create(NewIdea {
                title: Some("Persistente".to_string()),
                description: Some("sobrevive al reinicio".to_string()),
                category: None,
            })
            .unwrap();
        assert!(path.exists());

        let reopened = LocalBackend::open(path);
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list()[0].title, "Persistente");
    }

    #[test]
    fn test_absent_and_malformed_files_load_empty() {
        let tmp = TempDir::new().unwrap();

        let backend = LocalBackend::open(tmp.path().join("missing.json"));
        assert!(backend.list().is_empty());

        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ this is not an array").unwrap();
        let backend = LocalBackend::open(path);
        assert!(backend.list().is_empty());
    }

    #[test]
    fn test_id_counter_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ideas.json");

        let mut backend = LocalBackend::open(path.clone());
        let first = backend
            .create(NewIdea {
                title: Some("Uno".to_string()),
                description: Some("d".to_string()),
                category: None,
            })
            .unwrap();

        let mut reopened = LocalBackend::open(path);
        let second = reopened
            .create(NewIdea {
                title: Some("Dos".to_string()),
                description: Some("d".to_string()),
                category: None,
            })
            .unwrap();

        assert!(second.id > first.id);
    }
}
