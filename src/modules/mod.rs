pub mod auth;
pub mod common;
pub mod customer;
pub mod rental;
pub mod rental_request;
pub mod vehicle;
