pub mod address_use_cases;
pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod services;

pub use address_use_cases::AddressUseCases;
