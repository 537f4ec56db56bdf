pub mod config;
pub mod postgrest;
pub mod smart_search;
pub mod validation;
