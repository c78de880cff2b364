//! # Contact Book
//!
//! A contact management HTTP service.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Contact storage (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use contact_book::config::Settings;
use contact_book::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    contact_book::telemetry::init_tracing();

    info!("Starting Contact Book...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.database.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
