pub mod aggregate;

pub use aggregate::{
    CompanyCustomer, Customer, CustomerDetails, CustomerDraft, CustomerField, CustomerFilter,
    CustomerId, CustomerType, NewCustomer, PrivateCustomer,
};
