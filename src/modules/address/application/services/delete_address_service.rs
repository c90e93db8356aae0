use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::address::application::ports::incoming::use_cases::{
    DeleteAddressError, DeleteAddressUseCase,
};
use crate::address::application::ports::outgoing::address_repository::{
    AddressRepository, AddressRepositoryError,
};
use crate::auth::application::domain::entities::UserId;

pub struct DeleteAddressService<R>
where
    R: AddressRepository,
{
    address_repository: R,
}

impl<R> DeleteAddressService<R>
where
    R: AddressRepository,
{
    pub fn new(address_repository: R) -> Self {
        Self { address_repository }
    }
}

#[async_trait]
impl<R> DeleteAddressUseCase for DeleteAddressService<R>
where
    R: AddressRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, address_id: Uuid) -> Result<(), DeleteAddressError> {
        self.address_repository
            .soft_delete_address(owner, address_id)
            .await
            .map_err(|e| match e {
                AddressRepositoryError::NotFound => DeleteAddressError::NotFound,
                AddressRepositoryError::DatabaseError(msg) => {
                    DeleteAddressError::RepositoryError(msg)
                }
            })?;

        info!(user_id = %owner, address_id = %address_id, "Address soft-deleted");
        Ok(())
    }
}
