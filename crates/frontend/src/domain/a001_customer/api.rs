use contracts::domain::a001_customer::{Customer, CustomerFilter, CustomerId, NewCustomer};

use crate::shared::crud::{RestClient, RestResource, WritableResource};

pub struct CustomerResource;

impl RestResource for CustomerResource {
    const PATH: &'static str = "/api/customers";
    type Id = CustomerId;
    type Entity = Customer;
    type Filter = CustomerFilter;
}

impl WritableResource for CustomerResource {
    type Payload = NewCustomer;
}

pub type CustomerApi = RestClient<CustomerResource>;
