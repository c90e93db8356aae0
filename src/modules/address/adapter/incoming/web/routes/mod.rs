mod address_view;
mod create_address;
mod delete_address;
mod export_addresses;
mod list_addresses;
mod update_address;

use actix_web::web;

pub use address_view::AddressView;
pub use create_address::{__path_create_address_handler, create_address_handler, AddressMessageResponse, CreateAddressRequestDto};
pub use delete_address::{__path_delete_address_handler, delete_address_handler, MessageResponse};
pub use export_addresses::{__path_export_addresses_handler, export_addresses_handler, ExportRequestDto};
pub use list_addresses::{__path_list_addresses_handler, list_addresses_handler, AddressListResponse, ListAddressesQuery};
pub use update_address::{__path_update_address_handler, update_address_handler, UpdateAddressRequestDto};

/// Registers every `/address` route. The collection answers with and
/// without a trailing slash; `/address/export` precedes `/address/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/address", "/address/"])
            .route(web::get().to(list_addresses_handler))
            .route(web::post().to(create_address_handler)),
    )
    .service(export_addresses_handler)
    .service(update_address_handler)
    .service(delete_address_handler);
}
