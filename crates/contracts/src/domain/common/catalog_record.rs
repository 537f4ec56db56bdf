use crate::shared::postgrest::{collection_path, record_path, select_all_path};

/// Trait for records stored in a catalog table
///
/// Every catalog table is keyed by a surrogate id column; list, update and
/// delete paths are derived from the two static names below.
pub trait CatalogRecord {
    // ============================================================================
    // Instance
    // ============================================================================

    /// Surrogate id of the record, `None` before it is created
    fn record_id(&self) -> Option<&str>;

    /// Display name of the record
    fn display_name(&self) -> &str;

    // ============================================================================
    // Table metadata
    // ============================================================================

    /// Table name on the REST surface (e.g. "categories")
    fn collection_name() -> &'static str;

    /// Primary key column (e.g. "category_id")
    fn id_column() -> &'static str;

    // ============================================================================
    // Paths
    // ============================================================================

    /// "/rest/v1/{table}"
    fn collection_path() -> String {
        collection_path(Self::collection_name())
    }

    /// "/rest/v1/{table}?select=*"
    fn list_path() -> String {
        select_all_path(Self::collection_name())
    }

    /// "/rest/v1/{table}?{id_column}=eq.{id}"
    fn record_path(id: &str) -> String {
        record_path(Self::collection_name(), Self::id_column(), id)
    }
}

/// Name of the record with `id`, or `None` when the id is empty or unknown.
pub fn lookup_name<'a, T: CatalogRecord>(records: &'a [T], id: Option<&str>) -> Option<&'a str> {
    let id = id.filter(|id| !id.is_empty())?;
    records
        .iter()
        .find(|r| r.record_id() == Some(id))
        .map(|r| r.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::Category;

    fn category(id: &str, name: &str) -> Category {
        Category {
            category_id: Some(id.to_string()),
            name: name.to_string(),
            ..Category::default()
        }
    }

    #[test]
    fn test_lookup_name() {
        let records = vec![category("c1", "Novels"), category("c2", "Poetry")];
        assert_eq!(lookup_name(&records, Some("c2")), Some("Poetry"));
        assert_eq!(lookup_name(&records, Some("c3")), None);
        assert_eq!(lookup_name(&records, Some("")), None);
        assert_eq!(lookup_name(&records, None), None);
    }
}
