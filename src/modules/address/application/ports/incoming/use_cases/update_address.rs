use async_trait::async_trait;
use uuid::Uuid;

use crate::address::application::domain::entities::Address;
use crate::address::application::ports::outgoing::address_repository::AddressPatch;
use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAddressError {
    #[error("Address not found")]
    NotFound,

    #[error("Invalid address: {0}")]
    InvalidInput(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        address_id: Uuid,
        patch: AddressPatch,
    ) -> Result<Address, UpdateAddressError>;
}
