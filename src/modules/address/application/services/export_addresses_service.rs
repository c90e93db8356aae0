use async_trait::async_trait;

use crate::address::application::domain::export_field::ExportFields;
use crate::address::application::ports::incoming::use_cases::{
    ExportAddressesError, ExportAddressesUseCase,
};
use crate::address::application::ports::outgoing::address_query::AddressQuery;
use crate::address::application::services::csv_export::encode_addresses;
use crate::auth::application::domain::entities::UserId;

pub struct ExportAddressesService<Q>
where
    Q: AddressQuery,
{
    query: Q,
}

impl<Q> ExportAddressesService<Q>
where
    Q: AddressQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ExportAddressesUseCase for ExportAddressesService<Q>
where
    Q: AddressQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        fields: &ExportFields,
    ) -> Result<Vec<u8>, ExportAddressesError> {
        let addresses = self
            .query
            .find_all(owner)
            .await
            .map_err(|e| ExportAddressesError::QueryError(e.to_string()))?;

        tracing::debug!(user_id = %owner, rows = addresses.len(), "Encoding address export");

        encode_addresses(fields, &addresses)
            .map_err(|e| ExportAddressesError::EncodingError(e.to_string()))
    }
}
