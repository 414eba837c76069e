use contracts::domain::a003_sales_target::{
    SalesTarget, SalesTargetFilter, SalesTargetId, SalesTargetPayload,
};

use crate::shared::crud::{RestClient, RestResource, WritableResource};

pub struct SalesTargetResource;

impl RestResource for SalesTargetResource {
    const PATH: &'static str = "/api/sales-targets";
    type Id = SalesTargetId;
    type Entity = SalesTarget;
    type Filter = SalesTargetFilter;
}

impl WritableResource for SalesTargetResource {
    type Payload = SalesTargetPayload;
}

pub type SalesTargetApi = RestClient<SalesTargetResource>;
