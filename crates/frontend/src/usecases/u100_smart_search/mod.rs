//! Smart Search over orders
//!
//! - api.rs: one GET against the orders resource
//! - view_model.rs: criteria state and commands
//! - view.rs: criteria editor
//! - results.rs: expandable order cards

pub mod api;
pub mod results;
pub mod view;
pub mod view_model;
