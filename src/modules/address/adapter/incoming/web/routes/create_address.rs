use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::AddressView;
use crate::address::application::domain::entities::AddressFields;
use crate::address::application::ports::incoming::use_cases::CreateAddressError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::{ApiResponse, ErrorKind};
use crate::shared::validation::FieldErrors;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAddressRequestDto {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "9876543210")]
    pub phone: Option<String>,
    #[schema(example = "221B Baker Street")]
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
}

impl CreateAddressRequestDto {
    /// Splits the payload into domain fields, or the map of required fields
    /// that were absent.
    fn into_fields(self) -> Result<AddressFields, FieldErrors> {
        let mut missing = FieldErrors::new();
        let first_name = missing.require("first_name", self.first_name);
        let address_line1 = missing.require("address_line1", self.address_line1);
        let email = missing.require("email", self.email);

        let (Some(first_name), Some(address_line1), Some(email)) =
            (first_name, address_line1, email)
        else {
            return Err(missing);
        };

        Ok(AddressFields {
            first_name,
            last_name: self.last_name.unwrap_or_default(),
            email,
            phone: self.phone.unwrap_or_default(),
            address_line1,
            address_line2: self.address_line2.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            pincode: self.pincode.unwrap_or_default(),
        })
    }
}

#[derive(Serialize, ToSchema)]
pub struct AddressMessageResponse {
    #[schema(example = "Contact added to the Dictionary")]
    pub message: String,
    pub address: AddressView,
}

fn map_create_error(err: CreateAddressError) -> HttpResponse {
    match err {
        CreateAddressError::InvalidInput(details) => {
            warn!(fields = %details, "Address rejected by validation");
            ApiResponse::validation("Validation failed", details)
        }
        CreateAddressError::RepositoryError(e) => {
            error!(error = %e, "Failed to store address");
            ApiResponse::internal_error()
        }
    }
}

/// Add an address to the caller's book
#[utoipa::path(
    post,
    path = "/address/",
    tag = "address",
    request_body = CreateAddressRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Address created", body = inline(SuccessResponse<AddressMessageResponse>)),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 401, description = "Missing credentials", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn create_address_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateAddressRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match req.into_inner().into_fields() {
        Ok(fields) => fields,
        Err(missing) => {
            return ApiResponse::error_with_details(
                ErrorKind::BadRequest,
                "Missing required fields",
                missing,
            );
        }
    };

    match data.address.create.execute(user.user_id, fields).await {
        Ok(address) => ApiResponse::created(AddressMessageResponse {
            message: "Contact added to the Dictionary".to_string(),
            address: address.into(),
        }),
        Err(e) => map_create_error(e),
    }
}
