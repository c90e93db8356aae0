// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always "success"
    #[schema(example = "success")]
    pub status: String,
    /// Response data
    pub data: T,
}

/// Pagination block carried by list responses
#[derive(Serialize, ToSchema)]
pub struct PaginationMetaSchema {
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 10)]
    pub limit: u64,
    #[schema(example = 42)]
    pub total: u64,
    #[schema(example = 5)]
    pub total_pages: u64,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always "fail"
    #[schema(example = "fail")]
    pub status: String,
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "Validation failed")]
    pub message: String,
    /// Field name to message, present for field-level failures
    #[schema(value_type = Option<Object>, example = json!({"email": "must be a valid email address"}))]
    pub details: Option<std::collections::BTreeMap<String, String>>,
}
