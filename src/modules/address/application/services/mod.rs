pub mod address_validation;
pub mod create_address_service;
pub mod csv_export;
pub mod delete_address_service;
pub mod export_addresses_service;
pub mod list_addresses_service;
pub mod update_address_service;

pub use create_address_service::CreateAddressService;
pub use delete_address_service::DeleteAddressService;
pub use export_addresses_service::ExportAddressesService;
pub use list_addresses_service::ListAddressesService;
pub use update_address_service::UpdateAddressService;
