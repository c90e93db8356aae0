use async_trait::async_trait;

use crate::address::application::domain::entities::{Address, AddressFields};
use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAddressError {
    #[error("Invalid address: {0}")]
    InvalidInput(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        fields: AddressFields,
    ) -> Result<Address, CreateAddressError>;
}
