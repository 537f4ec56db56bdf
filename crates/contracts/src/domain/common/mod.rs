//! Common traits for catalog records

pub mod catalog_record;

// Re-exports
pub use catalog_record::{lookup_name, CatalogRecord};
