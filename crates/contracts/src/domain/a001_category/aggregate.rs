use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRecord;
use crate::shared::validation::{required_text, ValidationError};

// ============================================================================
// Record
// ============================================================================

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CatalogRecord for Category {
    fn record_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn id_column() -> &'static str {
        "category_id"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body for create and rename
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub name: String,
}

impl CategoryDto {
    pub fn from_input(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_use_surrogate_id() {
        assert_eq!(Category::list_path(), "/rest/v1/categories?select=*");
        assert_eq!(
            Category::record_path("c-1"),
            "/rest/v1/categories?category_id=eq.c-1"
        );
    }

    #[test]
    fn test_dto_requires_name() {
        assert_eq!(CategoryDto::from_input("  "), Err(ValidationError::Required("name")));
        assert_eq!(CategoryDto::from_input(" Novels ").unwrap().name, "Novels");
    }

    #[test]
    fn test_deserialize_row() {
        let json = r#"{"category_id":"c-1","name":"Kids","created_at":"2024-05-01T10:00:00+00:00"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.record_id(), Some("c-1"));
        assert_eq!(category.updated_at, None);
    }
}
