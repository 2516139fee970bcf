// Error types module
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the user API
///
/// Every variant except `Internal` is produced by explicit validation logic and
/// maps to a specific 4xx status. `Internal` is the catch-all boundary for
/// anything unexpected and is the only variant that gets logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Both name and email are required")]
    MissingFields,

    #[error("Name must be a non-empty string")]
    InvalidName,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("A user with this email already exists")]
    EmailConflict,

    #[error("User ID must be provided")]
    InvalidId,

    #[error("No user found with ID: {0}")]
    NotFound(String),

    #[error("Route {method} {path} not found")]
    RouteNotFound { method: String, path: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Short machine-readable code used in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFields => "MISSING_FIELDS",
            ApiError::InvalidName => "INVALID_NAME",
            ApiError::InvalidEmail => "INVALID_EMAIL",
            ApiError::EmailConflict => "EMAIL_EXISTS",
            ApiError::InvalidId => "INVALID_USER_ID",
            ApiError::NotFound(_) => "USER_NOT_FOUND",
            ApiError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error response body: `{"error": <code>, "message": <detail>}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidName | ApiError::InvalidEmail => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::EmailConflict => StatusCode::CONFLICT,
            ApiError::NotFound(_) | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            log::error!("Internal error while handling request: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::from(self))
    }
}
