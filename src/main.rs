//! Userbox server entrypoint.
//!
//! Configuration loading, logging setup, and server startup live in dedicated
//! modules so this file remains a thin orchestrator.

use anyhow::Result;
use log::info;
use userbox::config::ServerConfig;
use userbox::{lifecycle, logging};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (falls back to defaults when config.toml is missing)
    let config = ServerConfig::load("config.toml")?;

    // Logging before any other side effects
    logging::init_logging(&config.logging)?;

    info!("Userbox v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    let store = lifecycle::bootstrap();
    lifecycle::run(&config, store).await
}
