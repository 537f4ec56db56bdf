//! Product details dialog
//!
//! Same MVVM split as the other editors:
//! - model.rs: call to the product handler
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
