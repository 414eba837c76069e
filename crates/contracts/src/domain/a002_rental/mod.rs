pub mod aggregate;

pub use aggregate::{Rental, RentalFilter, RentalId, RentalMachineId, RentalStatus};
