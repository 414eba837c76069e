pub mod a001_customer;
pub mod a002_rental;
pub mod a003_sales_target;
