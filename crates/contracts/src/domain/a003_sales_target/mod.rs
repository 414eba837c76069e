pub mod aggregate;

pub use aggregate::{
    SalesTarget, SalesTargetDraft, SalesTargetField, SalesTargetFilter, SalesTargetId,
    SalesTargetPayload, TargetPeriod, TargetType,
};
