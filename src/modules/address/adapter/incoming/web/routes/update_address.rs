use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_address::AddressMessageResponse;
use crate::address::application::ports::incoming::use_cases::UpdateAddressError;
use crate::address::application::ports::outgoing::address_repository::{AddressPatch, PatchField};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields and explicit nulls keep the stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAddressRequestDto {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub first_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub last_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address_line1: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address_line2: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub city: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub state: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub country: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub pincode: PatchField<String>,
}

impl From<UpdateAddressRequestDto> for AddressPatch {
    fn from(req: UpdateAddressRequestDto) -> Self {
        AddressPatch {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            city: req.city,
            state: req.state,
            country: req.country,
            pincode: req.pincode,
        }
    }
}

fn map_update_error(address_id: Uuid, err: UpdateAddressError) -> HttpResponse {
    match err {
        UpdateAddressError::NotFound => ApiResponse::not_found("Address not found"),
        UpdateAddressError::InvalidInput(details) => {
            warn!(address_id = %address_id, fields = %details, "Address update rejected by validation");
            ApiResponse::validation("Validation failed", details)
        }
        UpdateAddressError::RepositoryError(e) => {
            error!(address_id = %address_id, error = %e, "Failed to update address");
            ApiResponse::internal_error()
        }
    }
}

/// Partially update one of the caller's addresses
#[utoipa::path(
    put,
    path = "/address/{id}",
    tag = "address",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = UpdateAddressRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Address updated", body = inline(SuccessResponse<AddressMessageResponse>)),
        (status = 400, description = "Malformed body or ID", body = ErrorResponse),
        (status = 401, description = "Missing credentials", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/address/{id}")]
pub async fn update_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateAddressRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let address_id = path.into_inner();
    let patch: AddressPatch = req.into_inner().into();

    match data
        .address
        .update
        .execute(user.user_id, address_id, patch)
        .await
    {
        Ok(address) => ApiResponse::success(AddressMessageResponse {
            message: "Contact updated".to_string(),
            address: address.into(),
        }),
        Err(e) => map_update_error(address_id, e),
    }
}
