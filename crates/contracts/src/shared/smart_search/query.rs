use std::fmt;

use super::catalog::is_pseudo_field;
use super::criterion::SearchCriterion;
use super::error::SearchError;
use crate::shared::postgrest::{collection_path, encode_component};

/// Collection queried by Smart Search
pub const ORDERS_RESOURCE: &str = "orders";

/// Embed requested for every search: order header, customer profile,
/// shipments (lines, products, categories, provider), payments, order lines
/// (products, categories) and refunds.
pub const ORDER_AGGREGATE_SELECT: &str = "*,\
user_profiles_user:user_profiles(full_name),\
order_shipment(*,shipment_products(*,product(*,category(*))),shipping_providers(*)),\
order_payment(*),\
order_products(*,product(*,category(*))),\
refunds(*)";

/// One `key=value` query parameter, unencoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: String,
    pub value: String,
}

impl QueryPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for QueryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered query parameters; repeated keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<QueryPair>);

impl QueryPairs {
    pub fn iter(&self) -> std::slice::Iter<'_, QueryPair> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|p| p.key == key)
    }

    pub fn push(&mut self, pair: QueryPair) {
        self.0.push(pair);
    }

    /// Percent-encoded `k=v&k=v` string; empty when there are no pairs.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|p| format!("{}={}", encode_component(&p.key), encode_component(&p.value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn into_inner(self) -> Vec<QueryPair> {
        self.0
    }
}

impl<'a> IntoIterator for &'a QueryPairs {
    type Item = &'a QueryPair;
    type IntoIter = std::slice::Iter<'a, QueryPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compile criteria into query parameters.
///
/// Incomplete criteria are skipped. Pseudo-fields emit `field=value`,
/// everything else `field=operator.value`. Input order is preserved.
pub fn compile_query(criteria: &[SearchCriterion]) -> QueryPairs {
    let mut pairs = QueryPairs::default();
    for criterion in criteria.iter().filter(|c| c.is_complete()) {
        let field = criterion.field.trim();
        let value = if is_pseudo_field(field) {
            criterion.value.clone()
        } else {
            format!("{}.{}", criterion.operator.trim(), criterion.value)
        };
        pairs.push(QueryPair::new(field, value));
    }
    pairs
}

/// A validated order search, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pairs: QueryPairs,
}

impl SearchRequest {
    /// Validate and compile `criteria`.
    ///
    /// Fails with [`SearchError::EmptyCriteria`] for an empty list. The fixed
    /// aggregate projection is prepended unless the criteria carry their own
    /// `select`.
    pub fn prepare(criteria: &[SearchCriterion]) -> Result<Self, SearchError> {
        if criteria.is_empty() {
            return Err(SearchError::EmptyCriteria);
        }

        let compiled = compile_query(criteria);
        let mut pairs = QueryPairs::default();
        if !compiled.contains_key("select") {
            pairs.push(QueryPair::new("select", ORDER_AGGREGATE_SELECT));
        }
        for pair in compiled.into_inner() {
            pairs.push(pair);
        }
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &QueryPairs {
        &self.pairs
    }

    /// "/rest/v1/orders?select=...&status=eq.pending"
    pub fn path_and_query(&self) -> String {
        format!(
            "{}?{}",
            collection_path(ORDERS_RESOURCE),
            self.pairs.to_query_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(field: &str, operator: &str, value: &str) -> SearchCriterion {
        SearchCriterion::with_parts(field, operator, value)
    }

    fn rendered(pairs: &QueryPairs) -> Vec<String> {
        pairs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_scalar_field_uses_operator_prefix() {
        let pairs = compile_query(&[c("order_number", "eq", "ORD-123")]);
        assert_eq!(rendered(&pairs), vec!["order_number=eq.ORD-123"]);
    }

    #[test]
    fn test_incomplete_criterion_is_dropped() {
        let pairs = compile_query(&[c("status", "neq", "cancelled"), c("user_id", "", "")]);
        assert_eq!(rendered(&pairs), vec!["status=neq.cancelled"]);
    }

    #[test]
    fn test_pseudo_field_is_passed_through() {
        let pairs = compile_query(&[c("select", "=", "id,name")]);
        assert_eq!(rendered(&pairs), vec!["select=id,name"]);

        let pairs = compile_query(&[c("order", "=", "timestamp.desc")]);
        assert_eq!(rendered(&pairs), vec!["order=timestamp.desc"]);
    }

    #[test]
    fn test_order_and_duplicates_are_preserved() {
        let pairs = compile_query(&[
            c("status", "neq", "cancelled"),
            c("order_number", "ilike", "*abc*"),
            c("status", "neq", "pending"),
        ]);
        assert_eq!(
            rendered(&pairs),
            vec!["status=neq.cancelled", "order_number=ilike.*abc*", "status=neq.pending"]
        );
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let inputs = vec![
            vec![],
            vec![c("", "", "")],
            vec![c("status", "eq", "x"), c("status", "", "x"), c("", "eq", "x")],
            vec![c("status", "eq", "x"), c("order_id", "eq", "7")],
        ];
        for criteria in inputs {
            let pairs = compile_query(&criteria);
            assert!(pairs.len() <= criteria.len());
            let all_complete = criteria.iter().all(|c| c.is_complete());
            assert_eq!(pairs.len() == criteria.len(), all_complete);
        }
    }

    #[test]
    fn test_empty_criteria_compile_to_empty_query_string() {
        assert_eq!(compile_query(&[]).to_query_string(), "");
    }

    #[test]
    fn test_query_string_escapes_injected_parameters() {
        let pairs = compile_query(&[c("status", "eq", "pending&user_id=eq.1")]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.to_query_string(), "status=eq.pending%26user_id%3Deq.1");
    }

    #[test]
    fn test_prepare_rejects_empty_criteria() {
        assert_eq!(SearchRequest::prepare(&[]), Err(SearchError::EmptyCriteria));
    }

    #[test]
    fn test_prepare_prefixes_aggregate_projection() {
        let request = SearchRequest::prepare(&[c("status", "eq", "shipped")]).unwrap();
        let pairs: Vec<&QueryPair> = request.pairs().iter().collect();
        assert_eq!(pairs[0], &QueryPair::new("select", ORDER_AGGREGATE_SELECT));
        assert_eq!(pairs[1].to_string(), "status=eq.shipped");
        assert!(request.path_and_query().starts_with("/rest/v1/orders?select="));
        assert!(request.path_and_query().ends_with("&status=eq.shipped"));
    }

    #[test]
    fn test_prepare_keeps_user_projection() {
        let request = SearchRequest::prepare(&[c("select", "=", "order_id,status")]).unwrap();
        assert_eq!(request.pairs().len(), 1);
        assert_eq!(
            request.path_and_query(),
            "/rest/v1/orders?select=order_id%2Cstatus"
        );
    }

    #[test]
    fn test_prepare_with_only_incomplete_rows_still_fetches_projection() {
        let request = SearchRequest::prepare(&[c("status", "", "")]).unwrap();
        assert_eq!(request.pairs().len(), 1);
        assert!(request.pairs().contains_key("select"));
    }
}
