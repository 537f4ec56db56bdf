use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRecord;
use crate::shared::validation::{optional_text, required_text, ValidationError};

/// Value types a specification can hold
pub const SPEC_VALUE_TYPES: &[&str] = &["string", "number", "boolean"];

// ============================================================================
// Record
// ============================================================================

/// Attribute defined for the products of one category (e.g. "Pages")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategorySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_spec_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(rename = "type", default)]
    pub spec_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CatalogRecord for CategorySpec {
    fn record_id(&self) -> Option<&str> {
        self.category_spec_id.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "category_specs"
    }

    fn id_column() -> &'static str {
        "category_spec_id"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body for create and update. Empty pickers are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategorySpecDto {
    pub name: String,
    pub category_id: Option<String>,
    #[serde(rename = "type")]
    pub spec_type: Option<String>,
}

impl CategorySpecDto {
    pub fn from_input(name: &str, category_id: &str, spec_type: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
            category_id: optional_text(category_id),
            spec_type: optional_text(spec_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_column_is_renamed() {
        let json = r#"{"category_spec_id":"s1","name":"Pages","category_id":"c1","type":"number"}"#;
        let spec: CategorySpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.spec_type.as_deref(), Some("number"));
        assert_eq!(CategorySpec::collection_name(), "category_specs");
    }

    #[test]
    fn test_dto_sends_null_for_empty_pickers() {
        let dto = CategorySpecDto::from_input("Pages", "", " ").unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"name": "Pages", "category_id": null, "type": null})
        );
    }

    #[test]
    fn test_dto_requires_name() {
        assert!(CategorySpecDto::from_input("", "c1", "string").is_err());
    }
}
