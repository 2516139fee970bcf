//! User endpoint handlers for the `/users` REST API
//!
//! Each handler is a single-shot synchronous transformation from request to
//! response; validation failures short-circuit with the first failing check and
//! never touch the store.

use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateUserRequest, User, UserListResponse};
use crate::store::{InsertOutcome, UserStore};
use crate::validation;

/// POST /users - Create a new user
///
/// # Example Request
/// ```json
/// {
///   "name": "  Alice ",
///   "email": "Alice@Example.com"
/// }
/// ```
///
/// # Example Response (201)
/// ```json
/// {
///   "id": "5f6b9a1e-1d24-4c0b-a601-3c1f4a3f9a20",
///   "name": "Alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # Errors
/// - 400 `MISSING_FIELDS` / `INVALID_NAME` / `INVALID_EMAIL`
/// - 409 `EMAIL_EXISTS` when another record has the same email (case-insensitive)
pub async fn create_user(
    req: web::Json<CreateUserRequest>,
    store: web::Data<UserStore>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    // Validation order matters: first failing check wins.
    if !CreateUserRequest::is_present(&req.name) || !CreateUserRequest::is_present(&req.email) {
        return Err(ApiError::MissingFields);
    }

    let name = match req.name {
        Some(JsonValue::String(ref s)) if validation::is_valid_name(s) => s.trim().to_string(),
        _ => return Err(ApiError::InvalidName),
    };

    let email = match req.email {
        Some(JsonValue::String(ref s)) if validation::is_valid_email(s) => s.to_lowercase(),
        _ => return Err(ApiError::InvalidEmail),
    };

    let user = User {
        id: Uuid::new_v4().to_string(),
        name,
        email,
    };

    // Uniqueness check and insert run under one write lock inside the store.
    match store.insert_unique(user.clone()) {
        InsertOutcome::Inserted => {
            debug!("Created user {} ({})", user.id, user.email);
            Ok(HttpResponse::Created().json(user))
        }
        InsertOutcome::DuplicateEmail => Err(ApiError::EmailConflict),
    }
}

/// GET /users/{id} - Fetch a single user by id
///
/// # Errors
/// - 400 `INVALID_USER_ID` for a blank id
/// - 404 `USER_NOT_FOUND`, message echoes the requested id
pub async fn get_user(
    path: web::Path<String>,
    store: web::Data<UserStore>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if id.trim().is_empty() {
        return Err(ApiError::InvalidId);
    }

    match store.get_by_id(&id) {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::NotFound(id)),
    }
}

/// GET /users - List all users with their count
pub async fn list_users(store: web::Data<UserStore>) -> HttpResponse {
    let users = store.list_all();
    let count = users.len();
    HttpResponse::Ok().json(UserListResponse { users, count })
}
