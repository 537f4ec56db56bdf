//! API utilities for talking to the hosted backend
//!
//! Builds absolute URLs from the configured project URL and attaches the
//! `apikey` / `Authorization` headers every request needs.

use contracts::shared::config::{BackendConfig, DEFAULT_CONFIG};
use gloo_net::http::RequestBuilder;
use once_cell::sync::Lazy;

use crate::system::auth::storage;

// A bad build-time override is reported once; the embedded settings are used instead.
static CONFIG: Lazy<BackendConfig> = Lazy::new(|| match BackendConfig::load() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid backend config ({:#}); using embedded defaults", e);
        BackendConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
    }
});

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/rest/v1/categories?select=*");
/// ```
pub fn api_url(path: &str) -> String {
    CONFIG.url(path)
}

/// Headers for anonymous calls (login, signup)
pub fn with_api_key(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Content-Type", "application/json")
        .header("apikey", &CONFIG.anon_key)
}

/// API key plus `Authorization: Bearer` when a token is stored
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = with_api_key(builder);
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}
