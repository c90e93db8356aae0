use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::{ApiResponse, ErrorKind};
use crate::shared::validation::FieldErrors;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "Str0ng!Pass")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "User registered successfully")]
    pub message: String,
    pub user: RegisteredUser,
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::InvalidInput(details) => {
            warn!(fields = %details, "Registration rejected by validation");
            ApiResponse::validation("Validation failed", details)
        }
        RegisterUserError::EmailAlreadyExists => {
            warn!("Registration rejected: email already registered");
            ApiResponse::conflict("Email is already registered")
        }
        RegisterUserError::HashingFailed(e) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        RegisterUserError::QueryError(e) | RegisterUserError::RepositoryError(e) => {
            error!(error = %e, "Database error during registration");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Weak password or invalid email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let mut missing = FieldErrors::new();
    let email = missing.require("email", dto.email);
    let password = missing.require("password", dto.password);

    let (Some(email), Some(password)) = (email, password) else {
        return ApiResponse::error_with_details(
            ErrorKind::BadRequest,
            "Missing required fields",
            missing,
        );
    };

    info!(email = %email, "Registration attempt");

    match data
        .register_user_use_case
        .execute(RegisterUserInput { email, password })
        .await
    {
        Ok(output) => {
            info!(user_id = %output.user_id, "User registered successfully");
            ApiResponse::created(RegisterResponse {
                message: "User registered successfully".to_string(),
                user: RegisteredUser {
                    id: output.user_id.to_string(),
                    email: output.email,
                },
            })
        }
        Err(e) => map_register_error(e),
    }
}
