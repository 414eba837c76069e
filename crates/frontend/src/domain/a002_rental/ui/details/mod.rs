//! Rental details (read-only)
//!
//! - view_model.rs: fetch state
//! - view.rs: Leptos component; derived fields are computed on render

mod view;
mod view_model;

pub use view::RentalDetails;
pub use view_model::{DetailState, RentalDetailsViewModel};
