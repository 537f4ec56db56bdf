use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRecord;
use crate::shared::validation::{required_text, ValidationError};

/// Publisher or supplier a product belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductOwner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_owner_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CatalogRecord for ProductOwner {
    fn record_id(&self) -> Option<&str> {
        self.product_owner_id.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "product_owner"
    }

    fn id_column() -> &'static str {
        "product_owner_id"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductOwnerDto {
    pub name: String,
}

impl ProductOwnerDto {
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
    fn test_record_path_escapes_id() {
        assert_eq!(
            ProductOwner::record_path("a b"),
            "/rest/v1/product_owner?product_owner_id=eq.a%20b"
        );
    }

    #[test]
    fn test_list_path_uses_singular_table() {
        assert_eq!(ProductOwner::collection_path(), "/rest/v1/product_owner");
        assert_eq!(ProductOwner::list_path(), "/rest/v1/product_owner?select=*");
    }

    #[test]
    fn test_dto_serializes_name_only() {
        let dto = ProductOwnerDto::from_input("Dar Al Shorouk").unwrap();
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"name":"Dar Al Shorouk"}"#);
    }
}
