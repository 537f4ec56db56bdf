use serde::{Deserialize, Serialize};

use super::catalog::{FieldCatalog, FilterOperator};
use super::query::{compile_query, QueryPairs};

/// One (field, operator, value) row of the search editor.
///
/// Empty strings mean "not chosen yet"; such a row is kept in the editor
/// but never reaches the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriterion {
    /// Opaque identity for list rendering
    pub id: String,
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl SearchCriterion {
    /// Empty criterion with a fresh id
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            field: String::new(),
            operator: String::new(),
            value: String::new(),
        }
    }

    /// Criterion with given parts (id is generated)
    pub fn with_parts(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
            ..Self::new()
        }
    }

    /// True when field, operator and value are all filled in.
    pub fn is_complete(&self) -> bool {
        !self.field.trim().is_empty()
            && !self.operator.trim().is_empty()
            && !self.value.trim().is_empty()
    }
}

impl Default for SearchCriterion {
    fn default() -> Self {
        Self::new()
    }
}

/// Attribute addressed by [`CriteriaList::update_criterion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionAttribute {
    Field,
    Operator,
    Value,
}

/// Ordered list of criteria bound to a field catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaList {
    catalog: FieldCatalog,
    items: Vec<SearchCriterion>,
}

impl CriteriaList {
    pub fn new(catalog: FieldCatalog) -> Self {
        Self {
            catalog,
            items: Vec::new(),
        }
    }

    pub fn catalog(&self) -> FieldCatalog {
        self.catalog
    }

    pub fn items(&self) -> &[SearchCriterion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an empty criterion and return its id.
    pub fn add_criterion(&mut self) -> String {
        let criterion = SearchCriterion::new();
        let id = criterion.id.clone();
        self.items.push(criterion);
        id
    }

    /// Remove by id; unknown ids are ignored.
    pub fn remove_criterion(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }

    /// Set one attribute of the criterion with `id`.
    ///
    /// Changing the field revalidates the operator against the new field:
    /// it survives only if the new field allows it, a single-operator field
    /// gets that operator preselected, and anything else is cleared.
    pub fn update_criterion(&mut self, id: &str, attribute: CriterionAttribute, value: impl Into<String>) {
        let catalog = self.catalog;
        let Some(criterion) = self.items.iter_mut().find(|c| c.id == id) else {
            return;
        };
        let value = value.into();
        match attribute {
            CriterionAttribute::Field => {
                if !catalog.allows(&value, &criterion.operator) {
                    criterion.operator = match catalog.operators_for(&value) {
                        [only] => only.token().to_string(),
                        _ => String::new(),
                    };
                }
                criterion.field = value;
            }
            CriterionAttribute::Operator => criterion.operator = value,
            CriterionAttribute::Value => criterion.value = value,
        }
    }

    pub fn operators_for(&self, field: &str) -> &'static [FilterOperator] {
        self.catalog.operators_for(field)
    }

    pub fn compile(&self) -> QueryPairs {
        compile_query(&self.items)
    }
}

impl Default for CriteriaList {
    fn default() -> Self {
        Self::new(FieldCatalog::orders())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with_one() -> (CriteriaList, String) {
        let mut list = CriteriaList::default();
        let id = list.add_criterion();
        (list, id)
    }

    #[test]
    fn test_add_criterion_appends_empty_rows_with_distinct_ids() {
        let mut list = CriteriaList::default();
        let first = list.add_criterion();
        let second = list.add_criterion();
        assert_eq!(list.len(), 2);
        assert_ne!(first, second);
        assert_eq!(list.items()[1].id, second);
        assert!(list.items().iter().all(|c| !c.is_complete()));
    }

    #[test]
    fn test_remove_criterion_ignores_unknown_id() {
        let (mut list, id) = list_with_one();
        list.remove_criterion("missing");
        assert_eq!(list.len(), 1);
        list.remove_criterion(&id);
        assert!(list.is_empty());
    }

    #[test]
    fn test_update_sets_single_attribute() {
        let (mut list, id) = list_with_one();
        list.update_criterion(&id, CriterionAttribute::Field, "status");
        list.update_criterion(&id, CriterionAttribute::Operator, "neq");
        list.update_criterion(&id, CriterionAttribute::Value, "cancelled");
        let c = &list.items()[0];
        assert_eq!((c.field.as_str(), c.operator.as_str(), c.value.as_str()), ("status", "neq", "cancelled"));
    }

    #[test]
    fn test_field_change_clears_unsupported_operator() {
        let (mut list, id) = list_with_one();
        list.update_criterion(&id, CriterionAttribute::Field, "order_number");
        list.update_criterion(&id, CriterionAttribute::Operator, "ilike");
        list.update_criterion(&id, CriterionAttribute::Field, "status");
        assert_eq!(list.items()[0].operator, "");
    }

    #[test]
    fn test_field_change_keeps_operator_still_allowed() {
        let (mut list, id) = list_with_one();
        list.update_criterion(&id, CriterionAttribute::Field, "status");
        list.update_criterion(&id, CriterionAttribute::Operator, "eq");
        list.update_criterion(&id, CriterionAttribute::Value, "pending");
        list.update_criterion(&id, CriterionAttribute::Field, "order_number");
        let c = &list.items()[0];
        assert_eq!(c.operator, "eq");
        assert_eq!(c.value, "pending");
    }

    #[test]
    fn test_field_change_preselects_sole_operator() {
        let (mut list, id) = list_with_one();
        list.update_criterion(&id, CriterionAttribute::Field, "user_id");
        list.update_criterion(&id, CriterionAttribute::Operator, "neq");
        list.update_criterion(&id, CriterionAttribute::Field, "select");
        assert_eq!(list.items()[0].operator, "=");
        list.update_criterion(&id, CriterionAttribute::Field, "");
        assert_eq!(list.items()[0].operator, "");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut list, _) = list_with_one();
        let before = list.clone();
        list.update_criterion("nope", CriterionAttribute::Value, "x");
        assert_eq!(list, before);
    }

    #[test]
    fn test_whitespace_value_is_incomplete() {
        let c = SearchCriterion::with_parts("status", "eq", "   ");
        assert!(!c.is_complete());
    }
}
