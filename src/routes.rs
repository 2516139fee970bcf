//! API routes configuration
//!
//! Wires the user endpoints, the health check, and the catch-all 404 handler.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::error::ApiError;
use crate::handlers;

/// Configure all HTTP routes:
/// - POST /users - create a user
/// - GET /users/{id} - fetch a user by id
/// - GET /users - list all users
/// - GET /healthz - health check
/// - anything else - 404 with method and path in the message
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(handlers::create_user))
        .route("/users", web::get().to(handlers::list_users))
        .route("/users/{id}", web::get().to(handlers::get_user))
        .route("/healthz", web::get().to(healthcheck_handler))
        .default_service(web::route().to(route_not_found));
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for requests that match no route.
async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}
