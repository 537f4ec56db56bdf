use serde::{Deserialize, Serialize};

/// Operator offered in the Smart Search editor.
///
/// `Equals` is the pseudo-operator of the response-shaping fields; the
/// others map one-to-one onto the backend's filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    Eq,
    Neq,
    Like,
    Ilike,
}

impl FilterOperator {
    /// Value stored in a criterion and written to the wire
    pub fn token(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "=",
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::Like => "like",
            FilterOperator::Ilike => "ilike",
        }
    }

    /// Localization key for the operator label
    pub fn label_key(&self) -> &'static str {
        match self {
            FilterOperator::Equals | FilterOperator::Eq => "operator.equals",
            FilterOperator::Neq => "operator.notEquals",
            FilterOperator::Like => "operator.contains",
            FilterOperator::Ilike => "operator.containsCI",
        }
    }
}

/// How the value of a field is entered and emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Single filter value compared against a column
    Scalar,
    /// Raw list passed through untouched (`select`, `order`)
    ListSelector,
}

/// Static description of one searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column / parameter name
    pub name: &'static str,
    /// Localization key for the field label
    pub label_key: &'static str,
    pub value_kind: ValueKind,
    /// Allowed operators, in display order
    pub operators: &'static [FilterOperator],
}

/// Parameters that shape the response instead of filtering rows.
pub const PSEUDO_FIELDS: &[&str] = &["select", "order"];

pub fn is_pseudo_field(field: &str) -> bool {
    PSEUDO_FIELDS.contains(&field)
}

const PASSTHROUGH: &[FilterOperator] = &[FilterOperator::Equals];

/// Searchable fields of the `orders` collection.
pub const ORDER_SEARCH_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "select",
        label_key: "field.select",
        value_kind: ValueKind::ListSelector,
        operators: PASSTHROUGH,
    },
    FieldDescriptor {
        name: "order",
        label_key: "field.order",
        value_kind: ValueKind::ListSelector,
        operators: PASSTHROUGH,
    },
    FieldDescriptor {
        name: "user_id",
        label_key: "field.userId",
        value_kind: ValueKind::Scalar,
        operators: &[FilterOperator::Eq, FilterOperator::Neq],
    },
    FieldDescriptor {
        name: "order_number",
        label_key: "field.orderNumber",
        value_kind: ValueKind::Scalar,
        operators: &[FilterOperator::Eq, FilterOperator::Like, FilterOperator::Ilike],
    },
    FieldDescriptor {
        name: "order_id",
        label_key: "field.orderId",
        value_kind: ValueKind::Scalar,
        operators: &[FilterOperator::Eq],
    },
    FieldDescriptor {
        name: "status",
        label_key: "field.status",
        value_kind: ValueKind::Scalar,
        operators: &[FilterOperator::Eq, FilterOperator::Neq],
    },
];

/// Field/operator table handed to the criteria builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCatalog {
    fields: &'static [FieldDescriptor],
}

impl FieldCatalog {
    pub const fn new(fields: &'static [FieldDescriptor]) -> Self {
        Self { fields }
    }

    /// Catalog for the order search screen
    pub const fn orders() -> Self {
        Self::new(ORDER_SEARCH_FIELDS)
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn find(&self, field: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|d| d.name == field)
    }

    /// Allowed operators for `field`; empty for an empty or unknown name.
    pub fn operators_for(&self, field: &str) -> &'static [FilterOperator] {
        self.find(field).map(|d| d.operators).unwrap_or(&[])
    }

    /// Whether `operator` (a wire token) is offered for `field`
    pub fn allows(&self, field: &str, operator: &str) -> bool {
        self.operators_for(field)
            .iter()
            .any(|op| op.token() == operator)
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::orders()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_for_known_fields_keep_display_order() {
        let catalog = FieldCatalog::orders();
        assert_eq!(
            catalog.operators_for("order_number"),
            &[FilterOperator::Eq, FilterOperator::Like, FilterOperator::Ilike]
        );
        assert_eq!(catalog.operators_for("select"), &[FilterOperator::Equals]);
    }

    #[test]
    fn test_operators_for_unknown_or_empty_field_is_empty() {
        let catalog = FieldCatalog::orders();
        assert!(catalog.operators_for("").is_empty());
        assert!(catalog.operators_for("total_amount").is_empty());
        assert!(catalog.operators_for("STATUS").is_empty());
    }

    #[test]
    fn test_pseudo_fields_are_list_selectors() {
        let catalog = FieldCatalog::orders();
        for name in PSEUDO_FIELDS {
            let descriptor = catalog.find(name).unwrap();
            assert_eq!(descriptor.value_kind, ValueKind::ListSelector);
        }
        assert!(!is_pseudo_field("status"));
    }

    #[test]
    fn test_injected_catalog_is_used() {
        const ONLY_SKU: &[FieldDescriptor] = &[FieldDescriptor {
            name: "sku",
            label_key: "products.sku",
            value_kind: ValueKind::Scalar,
            operators: &[FilterOperator::Ilike],
        }];
        let catalog = FieldCatalog::new(ONLY_SKU);
        assert!(catalog.allows("sku", "ilike"));
        assert!(!catalog.allows("status", "eq"));
    }

    #[test]
    fn test_allows_matches_tokens_not_labels() {
        let catalog = FieldCatalog::orders();
        assert!(catalog.allows("order_number", "ilike"));
        assert!(catalog.allows("select", "="));
        assert!(!catalog.allows("order_id", "neq"));
        assert!(!catalog.allows("status", "operator.equals"));
        assert!(!catalog.allows("", ""));
    }
}
