pub mod customer;
pub mod rental;
pub mod rental_request;
pub mod vehicle;

pub use customer::Customer;
pub use rental::{Rental, RentalStatus};
pub use rental_request::{RentalRequest, RentalRequestStatus};
pub use vehicle::{PriceList, RateTier, ServiceRecord, Vehicle, VehicleStatus};
