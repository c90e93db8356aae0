use async_trait::async_trait;

use crate::address::application::domain::entities::Address;
use crate::address::application::ports::outgoing::address_query::{
    AddressListFilter, PageRequest, PageResult,
};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAddressesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListAddressesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        filter: AddressListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Address>, ListAddressesError>;
}
