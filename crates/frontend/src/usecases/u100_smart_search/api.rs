use contracts::projections::p900_order_search::dto::OrderAggregate;
use contracts::shared::smart_search::{SearchCriterion, SearchError, SearchRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, with_auth};

/// Run an order search for the given criteria.
///
/// An empty list fails with [`SearchError::EmptyCriteria`] before any request
/// is made. Transport and decoding details are logged; callers only see
/// [`SearchError::SearchFailed`].
pub async fn execute_search(criteria: &[SearchCriterion]) -> Result<Vec<OrderAggregate>, SearchError> {
    let request = SearchRequest::prepare(criteria)?;
    let url = api_url(&request.path_and_query());
    log::debug!("smart search: GET {}", url);

    let response = with_auth(Request::get(&url)).send().await.map_err(|e| {
        log::error!("Smart search request failed: {}", e);
        SearchError::SearchFailed
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("Smart search failed: {} {}", status, body);
        return Err(SearchError::SearchFailed);
    }

    let orders = response.json::<Vec<OrderAggregate>>().await.map_err(|e| {
        log::error!("Smart search response could not be parsed: {}", e);
        SearchError::SearchFailed
    })?;
    log::info!("smart search: {} orders", orders.len());
    Ok(orders)
}
