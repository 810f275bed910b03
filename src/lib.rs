pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod modules;
pub mod services;
pub mod storage;
pub mod tracer;

pub use controller::RentalManager;
pub use error::Error;
