pub mod availability;
pub mod dto;
pub mod pricing;
pub mod repository;
