use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category applied when a new idea does not name one.
pub const DEFAULT_CATEGORY: &str = "personal";

/// Status every idea carries at creation.
pub const STATUS_NEW: &str = "nueva";

/// A captured idea. Field names follow the wire contract (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// Present only once the idea has been updated at least once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Idea {
    pub fn new(id: u64, title: String, description: String, category: String) -> Self {
        Self {
            id,
            title,
            description,
            category,
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Display label for the known categories; unknown ones render verbatim.
pub fn category_label(category: &str) -> &str {
    match category {
        "tecnologia" => "💻 Tecnología",
        "negocio" => "💼 Negocio",
        "personal" => "👤 Personal",
        "creativo" => "🎨 Creativo",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_idea_defaults() {
        let idea = Idea::new(1, "Título".to_string(), "Descripción".to_string(), DEFAULT_CATEGORY.to_string());
        assert_eq!(idea.status, STATUS_NEW);
        assert!(idea.updated_at.is_none());
    }

    #[test]
    fn test_serializes_camel_case_and_omits_updated_at() {
        let idea = Idea::new(7, "T".to_string(), "D".to_string(), "negocio".to_string());
        let json = serde_json::to_value(&idea).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_category_label_known_and_unknown() {
        assert_eq!(category_label("tecnologia"), "💻 Tecnología");
        assert_eq!(category_label("otra-cosa"), "otra-cosa");
    }
}
