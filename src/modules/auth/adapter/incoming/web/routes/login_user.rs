use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginUserInput};
use crate::shared::api::{ApiResponse, ErrorKind};
use crate::shared::validation::FieldErrors;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "Str0ng!Pass")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::forbidden("Invalid email or password")
        }
        LoginError::PasswordVerificationFailed(e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        LoginError::QueryError(e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with email and password
///
/// Returns a bearer token valid for 24 hours.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 403, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
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

    info!(email = %email, "Login attempt");

    match data
        .login_user_use_case
        .execute(LoginUserInput { email, password })
        .await
    {
        Ok(output) => {
            info!(user_id = %output.user_id, "User logged in successfully");
            ApiResponse::success(LoginResponse {
                token: output.token,
            })
        }
        Err(e) => map_login_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserOutput};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockLoginOutcome(Result<LoginUserOutput, LoginError>);

    #[async_trait]
    impl ILoginUserUseCase for MockLoginOutcome {
        async fn execute(&self, _input: LoginUserInput) -> Result<LoginUserOutput, LoginError> {
            self.0.clone()
        }
    }

    async fn post_login(
        outcome: Result<LoginUserOutput, LoginError>,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        load_test_env();
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginOutcome(outcome))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::json_config::custom_json_config())
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn credentials() -> serde_json::Value {
        serde_json::json!({ "email": "jane@example.com", "password": "Str0ng!Pass" })
    }

    #[actix_web::test]
    async fn test_login_success_returns_token() {
        let (status, body) = post_login(
            Ok(LoginUserOutput {
                user_id: UserId::from(Uuid::new_v4()),
                token: "signed.jwt.token".to_string(),
            }),
            credentials(),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["token"], "signed.jwt.token");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_is_forbidden() {
        let (status, body) = post_login(Err(LoginError::InvalidCredentials), credentials()).await;

        assert_eq!(status, 403);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["error"], "FORBIDDEN");
        assert_eq!(body["message"], "Invalid email or password");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_login_missing_password_is_bad_request() {
        let (status, body) = post_login(
            Err(LoginError::InvalidCredentials),
            serde_json::json!({ "email": "jane@example.com" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["details"]["password"], "is required");
    }

    #[actix_web::test]
    async fn test_login_malformed_json_is_bad_request() {
        load_test_env();
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::json_config::custom_json_config())
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_login_infrastructure_errors_are_internal() {
        for err in [
            LoginError::QueryError("pool exhausted".to_string()),
            LoginError::PasswordVerificationFailed("Background task failed".to_string()),
            LoginError::TokenGenerationFailed("signing failed".to_string()),
        ] {
            let (status, body) = post_login(Err(err), credentials()).await;
            assert_eq!(status, 500);
            assert_eq!(body["message"], "An unexpected error occurred");
        }
    }
}
