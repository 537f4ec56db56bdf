//! Generic CRUD calls against the REST tables
//!
//! Every catalog record type describes its table through
//! [`CatalogRecord`]; these helpers turn that into list/create/update/delete
//! requests. Errors are returned as strings and logged here.

use contracts::domain::common::CatalogRecord;
use contracts::shared::postgrest::PREFER_REPRESENTATION;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::api_utils::{api_url, with_auth};

async fn error_text(context: &str, response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("{} failed: {} {}", context, status, body);
    format!("{}: HTTP {}", context, status)
}

/// `GET /rest/v1/{table}?select=*`
pub async fn fetch_all<T>() -> Result<Vec<T>, String>
where
    T: CatalogRecord + DeserializeOwned,
{
    let context = format!("List {}", T::collection_name());
    let response = with_auth(Request::get(&api_url(&T::list_path())))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(&context, response).await);
    }

    let rows = response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    log::debug!("{}: {} rows", context, rows.len());
    Ok(rows)
}

/// `POST /rest/v1/{table}` returning the created rows
pub async fn insert<T, B>(body: &B) -> Result<Vec<T>, String>
where
    T: CatalogRecord + DeserializeOwned,
    B: Serialize,
{
    let context = format!("Create {}", T::collection_name());
    let (prefer, representation) = PREFER_REPRESENTATION;
    let response = with_auth(Request::post(&api_url(&T::collection_path())))
        .header(prefer, representation)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(&context, response).await);
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `PATCH /rest/v1/{table}?{id}=eq.{id}`
pub async fn update<T, B>(id: &str, body: &B) -> Result<(), String>
where
    T: CatalogRecord,
    B: Serialize,
{
    let context = format!("Update {}", T::collection_name());
    let (prefer, representation) = PREFER_REPRESENTATION;
    let response = with_auth(Request::patch(&api_url(&T::record_path(id))))
        .header(prefer, representation)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(&context, response).await);
    }
    Ok(())
}

/// `DELETE /rest/v1/{table}?{id}=eq.{id}`
pub async fn delete<T>(id: &str) -> Result<(), String>
where
    T: CatalogRecord,
{
    let context = format!("Delete {}", T::collection_name());
    let response = with_auth(Request::delete(&api_url(&T::record_path(id))))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(&context, response).await);
    }
    log::info!("{}: {} removed", context, id);
    Ok(())
}

/// `POST` a JSON body to an edge function
pub async fn call_function<B>(path: &str, body: &B) -> Result<serde_json::Value, String>
where
    B: Serialize,
{
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(path, response).await);
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
