mod create_address;
mod delete_address;
mod export_addresses;
mod list_addresses;
mod update_address;

pub use create_address::{CreateAddressError, CreateAddressUseCase};
pub use delete_address::{DeleteAddressError, DeleteAddressUseCase};
pub use export_addresses::{ExportAddressesError, ExportAddressesUseCase};
pub use list_addresses::{ListAddressesError, ListAddressesUseCase};
pub use update_address::{UpdateAddressError, UpdateAddressUseCase};
