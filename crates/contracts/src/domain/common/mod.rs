//! Common types and helpers for all aggregates

pub mod aggregate_id;
pub mod draft;

// Re-exports
pub use aggregate_id::AggregateId;
pub(crate) use aggregate_id::uuid_aggregate_id;
pub use draft::DraftError;
