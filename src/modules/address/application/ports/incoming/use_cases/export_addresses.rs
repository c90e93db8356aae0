use async_trait::async_trait;

use crate::address::application::domain::export_field::ExportFields;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportAddressesError {
    #[error("Query error: {0}")]
    QueryError(String),

    #[error("CSV encoding failed: {0}")]
    EncodingError(String),
}

#[async_trait]
pub trait ExportAddressesUseCase: Send + Sync {
    /// Renders every non-deleted record of the owner as CSV bytes.
    async fn execute(
        &self,
        owner: UserId,
        fields: &ExportFields,
    ) -> Result<Vec<u8>, ExportAddressesError>;
}
