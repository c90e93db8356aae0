use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use super::delete_address::MessageResponse;
use crate::address::application::orchestrator::address_export::ExportRequestError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::{ApiResponse, ErrorKind};
use crate::shared::validation::FieldErrors;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportRequestDto {
    /// Column names, in output order
    #[schema(example = json!(["first_name", "email"]))]
    pub fields: Option<Vec<String>>,

    /// Recipient of the CSV attachment
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

fn map_export_error(err: ExportRequestError) -> HttpResponse {
    match err {
        ExportRequestError::InvalidFields(e) => {
            warn!(error = %e, "Export rejected: bad field list");
            ApiResponse::bad_request(&e.to_string())
        }
        ExportRequestError::InvalidRecipient => {
            let mut details = FieldErrors::new();
            details.add("email", "must be a valid email address");
            ApiResponse::validation("Validation failed", details)
        }
    }
}

/// Email the caller's addresses as a CSV attachment
///
/// The request is acknowledged once validated; generation and delivery
/// happen in the background and their failures are not reported back.
#[utoipa::path(
    post,
    path = "/address/export",
    tag = "address",
    request_body = ExportRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 202, description = "Export accepted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Missing fields or unknown export column", body = ErrorResponse),
        (status = 401, description = "Missing credentials", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid recipient address", body = ErrorResponse),
    )
)]
#[post("/address/export")]
pub async fn export_addresses_handler(
    user: AuthenticatedUser,
    req: web::Json<ExportRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let mut missing = FieldErrors::new();
    let fields = missing.require("fields", dto.fields);
    let email = missing.require("email", dto.email);

    let (Some(fields), Some(email)) = (fields, email) else {
        return ApiResponse::error_with_details(
            ErrorKind::BadRequest,
            "Missing required fields",
            missing,
        );
    };

    match data.address.export.start(user.user_id, &fields, &email) {
        // The export runs detached; its handle is only awaited in tests.
        Ok(_handle) => ApiResponse::accepted(MessageResponse {
            message: "Export started. CSV will be sent to your email shortly.".to_string(),
        }),
        Err(e) => map_export_error(e),
    }
}
