//! Shared entity form/list lifecycle.
//!
//! - client.rs: remote data client traits and the REST implementation
//! - form.rs: create/edit mode, submit guard and the submit step
//! - list.rs: list fetch state and stale-response protection

pub mod client;
pub mod form;
pub mod list;

pub use client::{EntityReader, EntityWriter, RestClient, RestResource, WritableResource};
pub use form::{submit, FormError, FormMode, SubmitGuard};
pub use list::{deactivate_and_reload, Deactivation, LatestRequest, ListState, ListView};
