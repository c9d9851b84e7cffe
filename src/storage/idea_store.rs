use serde::{Deserialize, Serialize};

use crate::entity::{Idea, DEFAULT_CATEGORY};
use crate::error::{IdearioError, Result};

/// Payload for creating an idea.
///
/// Fields are optional so that a request missing one still deserializes;
/// presence is enforced by [`IdeaStore::create`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Partial-update payload. Absent and empty fields leave the stored value
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// In-memory idea collection, newest first.
///
/// Owns id assignment and the record invariants: ids are unique for the
/// lifetime of the store, titles and descriptions are never stored empty,
/// and updates never move a record.
#[derive(Debug)]
pub struct IdeaStore {
    ideas: Vec<Idea>,
    next_id: u64,
}

impl Default for IdeaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaStore {
    pub fn new() -> Self {
        Self {
            ideas: Vec::new(),
            next_id: 1,
        }
    }

    /// The two example records every fresh server process starts with.
    pub fn seeded() -> Self {
        let ideas = vec![
            Idea::new(
                1,
                "Aplicación de gestión de tareas".to_string(),
                "Crear una aplicación web para gestionar tareas personales con categorías y prioridades"
                    .to_string(),
                "tecnologia".to_string(),
            ),
            Idea::new(
                2,
                "Blog sobre tecnología".to_string(),
                "Iniciar un blog personal donde compartir conocimientos sobre desarrollo web"
                    .to_string(),
                "personal".to_string(),
            ),
        ];
        Self { ideas, next_id: 3 }
    }

    /// Restore a store from a previously serialized array.
    pub fn from_records(ideas: Vec<Idea>) -> Self {
        let next_id = ideas.iter().map(|i| i.id).max().map_or(1, |max| max + 1);
        Self { ideas, next_id }
    }

    /// All records in current order, newest first.
    pub fn list(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&Idea> {
        self.ideas
            .iter()
            .find(|idea| idea.id == id)
            .ok_or(IdearioError::NotFound(id))
    }

    /// Validate, trim and insert a new idea at the front of the collection.
    pub fn create(&mut self, new: NewIdea) -> Result<Idea> {
        let title = new.title.as_deref().map(str::trim).unwrap_or("");
        let description = new.description.as_deref().map(str::trim).unwrap_or("");

        if title.is_empty() || description.is_empty() {
            return Err(IdearioError::InvalidInput(
                "Título y descripción son requeridos".to_string(),
            ));
        }

        let category = new
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let idea = Idea::new(
            self.next_id,
            title.to_string(),
            description.to_string(),
            category,
        );
        self.next_id += 1;
        self.ideas.insert(0, idea.clone());

        Ok(idea)
    }

    /// Apply the present, non-empty fields of `patch` and stamp `updated_at`.
    /// The record keeps its position in the ordering.
    pub fn update(&mut self, id: u64, patch: IdeaPatch) -> Result<Idea> {
        let idea = self
            .ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or(IdearioError::NotFound(id))?;

        if let Some(title) = patch.title.filter(|s| !s.is_empty()) {
            idea.title = title;
        }
        if let Some(description) = patch.description.filter(|s| !s.is_empty()) {
            idea.description = description;
        }
        if let Some(category) = patch.category.filter(|s| !s.is_empty()) {
            idea.category = category;
        }
        if let Some(status) = patch.status.filter(|s| !s.is_empty()) {
            idea.status = status;
        }
        idea.updated_at = Some(chrono::Utc::now());

        Ok(idea.clone())
    }

    /// Remove the idea and return it.
    pub fn delete(&mut self, id: u64) -> Result<Idea> {
        let position = self
            .ideas
            .iter()
            .position(|idea| idea.id == id)
            .ok_or(IdearioError::NotFound(id))?;

        Ok(self.ideas.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::STATUS_NEW;

    fn draft(title: &str, description: &str) -> NewIdea {
        NewIdea {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            category: None,
        }
    }

    #[test]
    fn test_create_trims_and_applies_defaults() {
        let mut store = IdeaStore::new();

        let idea = store.create(draft("  Una idea  ", "  Con detalle  ")).unwrap();

        assert_eq!(idea.title, "Una idea");
        assert_eq!(idea.description, "Con detalle");
        assert_eq!(idea.category, DEFAULT_CATEGORY);
        assert_eq!(idea.status, STATUS_NEW);

        let stored = store.get(idea.id).unwrap();
        assert_eq!(stored.title, "Una idea");
        assert!(stored.updated_at.is_none());
    }

    #[test]
    fn test_create_rejects_blank_fields_without_mutating() {
        let mut store = IdeaStore::seeded();
        let before = store.len();

        let err = store.create(draft("", "x")).unwrap_err();
        assert!(matches!(err, IdearioError::InvalidInput(_)));

        let err = store.create(draft("x", "   ")).unwrap_err();
        assert!(matches!(err, IdearioError::InvalidInput(_)));

        let err = store
            .create(NewIdea {
                title: None,
                description: Some("x".to_string()),
                category: None,
            })
            .unwrap_err();
        assert!(matches!(err, IdearioError::InvalidInput(_)));

        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_new_ideas_go_to_the_front() {
        let mut store = IdeaStore::new();

        store.create(draft("A", "primera")).unwrap();
        store.create(draft("B", "segunda")).unwrap();

        let titles: Vec<&str> = store.list().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut store = IdeaStore::seeded();

        let a = store.create(draft("A", "d")).unwrap();
        let b = store.create(draft("B", "d")).unwrap();

        assert_eq!(a.id, 3);
        assert_eq!(b.id, 4);

        // A deleted id is never handed out again.
        store.delete(a.id).unwrap();
        let c = store.create(draft("C", "d")).unwrap();
        assert_eq!(c.id, 5);
    }

    #[test]
    fn test_update_touches_only_given_fields() {
        let mut store = IdeaStore::seeded();
        store.create(draft("Para editar", "descripción")).unwrap();

        let updated = store
            .update(
                3,
                IdeaPatch {
                    status: Some("done".to_string()),
                    ..IdeaPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, "done");
        assert_eq!(updated.title, "Para editar");
        assert_eq!(updated.description, "descripción");
        assert_eq!(updated.category, DEFAULT_CATEGORY);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_update_skips_empty_strings() {
        let mut store = IdeaStore::new();
        store.create(draft("Original", "texto")).unwrap();

        let updated = store
            .update(
                1,
                IdeaPatch {
                    title: Some(String::new()),
                    description: Some("nuevo texto".to_string()),
                    ..IdeaPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description, "nuevo texto");
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = IdeaStore::new();
        store.create(draft("A", "d")).unwrap();
        store.create(draft("B", "d")).unwrap();

        store
            .update(
                1,
                IdeaPatch {
                    status: Some("revisada".to_string()),
                    ..IdeaPatch::default()
                },
            )
            .unwrap();

        // The updated record stays last; the newest stays first.
        assert_eq!(store.list()[0].title, "B");
        assert_eq!(store.list()[1].title, "A");
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut store = IdeaStore::seeded();
        let err = store.update(999, IdeaPatch::default()).unwrap_err();
        assert!(matches!(err, IdearioError::NotFound(999)));
    }

    #[test]
    fn test_delete_returns_record_and_unknown_id_fails() {
        let mut store = IdeaStore::seeded();
        let before = store.len();

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(store.len(), before - 1);
        assert!(matches!(store.get(1), Err(IdearioError::NotFound(1))));

        let err = store.delete(9999999).unwrap_err();
        assert!(matches!(err, IdearioError::NotFound(_)));
        assert_eq!(store.len(), before - 1);
    }

    #[test]
    fn test_seeded_store_has_two_examples() {
        let store = IdeaStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, 1);
        assert_eq!(store.list()[1].id, 2);
    }

    #[test]
    fn test_from_records_resumes_id_counter() {
        let mut store = IdeaStore::seeded();
        store.create(draft("X", "d")).unwrap();

        let records = store.list().to_vec();
        let mut restored = IdeaStore::from_records(records);

        let idea = restored.create(draft("Y", "d")).unwrap();
        assert_eq!(idea.id, 4);
    }
}
