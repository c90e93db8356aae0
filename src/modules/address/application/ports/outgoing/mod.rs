pub mod address_query;
pub mod address_repository;

pub use address_query::{AddressListFilter, AddressQuery, AddressQueryError, PageRequest, PageResult};
pub use address_repository::{AddressPatch, AddressRepository, AddressRepositoryError, PatchField};
