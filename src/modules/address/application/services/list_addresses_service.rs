use async_trait::async_trait;

use crate::address::application::domain::entities::Address;
use crate::address::application::ports::incoming::use_cases::{
    ListAddressesError, ListAddressesUseCase,
};
use crate::address::application::ports::outgoing::address_query::{
    AddressListFilter, AddressQuery, PageRequest, PageResult,
};
use crate::auth::application::domain::entities::UserId;

pub struct ListAddressesService<Q>
where
    Q: AddressQuery,
{
    query: Q,
}

impl<Q> ListAddressesService<Q>
where
    Q: AddressQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAddressesUseCase for ListAddressesService<Q>
where
    Q: AddressQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        filter: AddressListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Address>, ListAddressesError> {
        self.query
            .list(owner, filter, page)
            .await
            .map_err(|e| ListAddressesError::QueryError(e.to_string()))
    }
}
