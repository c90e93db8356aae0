use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Identity resolved from a valid bearer token. Handlers take this as an
/// argument to require authentication.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

#[derive(Debug, PartialEq, Eq)]
enum HeaderError {
    Missing,
    Malformed,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("Token provider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Ok(t) => t,
            Err(HeaderError::Missing) => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Authorization header is required",
                ))));
            }
            Err(HeaderError::Malformed) => {
                return ready(Err(create_api_error(ApiResponse::forbidden(
                    "Invalid authorization header format",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.user_id,
                email: claims.email,
            })),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

/// Accepts exactly `Bearer <token>`: two whitespace-separated parts, the
/// first being the literal scheme.
fn extract_token_from_header(req: &HttpRequest) -> Result<String, HeaderError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .ok_or(HeaderError::Missing)?;

    let value = header.to_str().map_err(|_| HeaderError::Malformed)?;
    let parts: Vec<&str> = value.split_whitespace().collect();

    match parts.as_slice() {
        ["Bearer", token] => Ok((*token).to_string()),
        _ => Err(HeaderError::Malformed),
    }
}
