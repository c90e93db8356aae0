use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::address::application::ports::incoming::use_cases::DeleteAddressError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Contact deleted from the Dictionary")]
    pub message: String,
}

fn map_delete_error(address_id: Uuid, err: DeleteAddressError) -> HttpResponse {
    match err {
        DeleteAddressError::NotFound => ApiResponse::not_found("Address not found"),
        DeleteAddressError::RepositoryError(e) => {
            error!(address_id = %address_id, error = %e, "Failed to delete address");
            ApiResponse::internal_error()
        }
    }
}

/// Soft-delete one of the caller's addresses
#[utoipa::path(
    delete,
    path = "/address/{id}",
    tag = "address",
    params(("id" = Uuid, Path, description = "Address ID")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Address deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing credentials", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/address/{id}")]
pub async fn delete_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let address_id = path.into_inner();

    match data.address.delete.execute(user.user_id, address_id).await {
        Ok(()) => ApiResponse::success(MessageResponse {
            message: "Contact deleted from the Dictionary".to_string(),
        }),
        Err(e) => map_delete_error(address_id, e),
    }
}
