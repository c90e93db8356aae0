use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::address::application::domain::entities::Address;
use crate::address::application::ports::incoming::use_cases::{
    UpdateAddressError, UpdateAddressUseCase,
};
use crate::address::application::ports::outgoing::address_repository::{
    AddressPatch, AddressRepository, AddressRepositoryError,
};
use crate::address::application::services::address_validation::validate_patch;
use crate::auth::application::domain::entities::UserId;

pub struct UpdateAddressService<R>
where
    R: AddressRepository,
{
    address_repository: R,
}

impl<R> UpdateAddressService<R>
where
    R: AddressRepository,
{
    pub fn new(address_repository: R) -> Self {
        Self { address_repository }
    }
}

#[async_trait]
impl<R> UpdateAddressUseCase for UpdateAddressService<R>
where
    R: AddressRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        address_id: Uuid,
        patch: AddressPatch,
    ) -> Result<Address, UpdateAddressError> {
        let patch = patch.trimmed();
        validate_patch(&patch).map_err(UpdateAddressError::InvalidInput)?;

        let address = self
            .address_repository
            .patch_address(owner, address_id, patch)
            .await
            .map_err(|e| match e {
                AddressRepositoryError::NotFound => {
                    warn!(user_id = %owner, address_id = %address_id, "Update target not found");
                    UpdateAddressError::NotFound
                }
                AddressRepositoryError::DatabaseError(msg) => {
                    UpdateAddressError::RepositoryError(msg)
                }
            })?;

        info!(user_id = %owner, address_id = %address_id, "Address updated");
        Ok(address)
    }
}
