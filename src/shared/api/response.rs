// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::FieldErrors;

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Error categories exposed to clients. Each maps to one HTTP status and one
/// stable machine-readable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
}

#[derive(Serialize, Clone)]
pub struct ApiFailure {
    pub status: &'static str,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

impl<T: Serialize> ApiResponse<T> {
    fn body(data: T, meta: Option<PaginationMeta>) -> Self {
        ApiResponse {
            status: "success",
            data,
            meta,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::body(data, None))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::body(data, None))
    }

    pub fn accepted(data: T) -> HttpResponse {
        HttpResponse::Accepted().json(Self::body(data, None))
    }

    pub fn paginated(data: T, meta: PaginationMeta) -> HttpResponse {
        HttpResponse::Ok().json(Self::body(data, Some(meta)))
    }
}

impl ApiResponse<()> {
    pub fn error(kind: ErrorKind, message: &str) -> HttpResponse {
        Self::failure(kind, message, None)
    }

    pub fn error_with_details(kind: ErrorKind, message: &str, details: FieldErrors) -> HttpResponse {
        let details = (!details.is_empty()).then_some(details);
        Self::failure(kind, message, details)
    }

    fn failure(kind: ErrorKind, message: &str, details: Option<FieldErrors>) -> HttpResponse {
        HttpResponse::build(kind.status()).json(ApiFailure {
            status: "fail",
            error: kind.code(),
            message: message.to_string(),
            details,
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(ErrorKind::BadRequest, message)
    }

    pub fn validation(message: &str, details: FieldErrors) -> HttpResponse {
        Self::error_with_details(ErrorKind::Validation, message, details)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(ErrorKind::Conflict, message)
    }

    /// Internal failures never leak their cause to the client.
    pub fn internal_error() -> HttpResponse {
        Self::error(ErrorKind::Internal, INTERNAL_ERROR_MESSAGE)
    }
}
