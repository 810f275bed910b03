pub mod dto;
pub mod repository;
