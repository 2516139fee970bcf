//! Server lifecycle management helpers.
//!
//! Encapsulates the wiring that would otherwise clutter `main.rs`: building
//! the shared application state and running the HTTP server.

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::info;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::routes;
use crate::store::UserStore;

/// Build the shared application state.
///
/// The store is the single owner of all user records; handlers receive it as
/// `web::Data` (dependency injection keeps them testable against a fresh
/// store).
pub fn bootstrap() -> web::Data<UserStore> {
    web::Data::new(UserStore::new())
}

/// JSON extractor configuration.
///
/// An empty body is treated like an empty object (both fields absent), so it
/// fails the presence check instead of the parser. Any other unparseable body
/// is an unexpected failure at the boundary, converted to the generic 500
/// rather than a validation error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        if is_empty_body(&err) {
            return ApiError::MissingFields.into();
        }
        ApiError::Internal(format!("Failed to parse request body: {}", err)).into()
    })
}

// serde_json reports an empty input as EOF at line 1, column 0; truncated JSON
// hits EOF at a later column.
fn is_empty_body(err: &actix_web::error::JsonPayloadError) -> bool {
    match err {
        actix_web::error::JsonPayloadError::Deserialize(e) => e.is_eof() && e.column() == 0,
        _ => false,
    }
}

/// Run the HTTP server until termination.
pub async fn run(config: &ServerConfig, store: web::Data<UserStore>) -> Result<()> {
    let bind_addr = config.bind_addr();
    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };

    info!("Listening on http://{} ({} workers)", bind_addr, workers);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(json_config())
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
