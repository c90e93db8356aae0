use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAddressError {
    #[error("Address not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAddressUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, address_id: Uuid) -> Result<(), DeleteAddressError>;
}
