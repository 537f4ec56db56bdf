//! Smart Search: criteria editor state and the order query compiler.

pub mod catalog;
pub mod criterion;
pub mod error;
pub mod query;

pub use catalog::*;
pub use criterion::*;
pub use error::*;
pub use query::*;
