use async_trait::async_trait;
use tracing::{error, info};

use crate::address::application::domain::entities::{Address, AddressFields};
use crate::address::application::ports::incoming::use_cases::{
    CreateAddressError, CreateAddressUseCase,
};
use crate::address::application::ports::outgoing::address_repository::{
    AddressRepository, AddressRepositoryError,
};
use crate::address::application::services::address_validation::validate_new_address;
use crate::auth::application::domain::entities::UserId;

pub struct CreateAddressService<R>
where
    R: AddressRepository,
{
    address_repository: R,
}

impl<R> CreateAddressService<R>
where
    R: AddressRepository,
{
    pub fn new(address_repository: R) -> Self {
        Self { address_repository }
    }
}

#[async_trait]
impl<R> CreateAddressUseCase for CreateAddressService<R>
where
    R: AddressRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        fields: AddressFields,
    ) -> Result<Address, CreateAddressError> {
        let fields = fields.trimmed();
        validate_new_address(&fields).map_err(CreateAddressError::InvalidInput)?;

        let address = self
            .address_repository
            .create_address(owner, fields)
            .await
            .map_err(|e| match e {
                AddressRepositoryError::DatabaseError(msg) => {
                    error!(user_id = %owner, error = %msg, "Failed to create address");
                    CreateAddressError::RepositoryError(msg)
                }
                AddressRepositoryError::NotFound => {
                    CreateAddressError::RepositoryError("insert returned no row".to_string())
                }
            })?;

        info!(user_id = %owner, address_id = %address.id, "Address created");
        Ok(address)
    }
}
