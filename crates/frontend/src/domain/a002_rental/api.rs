use contracts::domain::a002_rental::{Rental, RentalFilter, RentalId};

use crate::shared::crud::{RestClient, RestResource};

pub struct RentalResource;

impl RestResource for RentalResource {
    const PATH: &'static str = "/api/rentals";
    type Id = RentalId;
    type Entity = Rental;
    type Filter = RentalFilter;
}

pub type RentalApi = RestClient<RentalResource>;
