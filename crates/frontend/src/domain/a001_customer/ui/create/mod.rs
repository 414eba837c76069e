//! Customer creation page
//!
//! - view_model.rs: form state, submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CustomerCreate;
pub use view_model::CustomerCreateViewModel;
