//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::application::services::ContactServiceImpl;
use crate::config::{Settings, StorageBackend};
use crate::domain::ContactRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryContactRepository, PgContactRepository};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Contact storage handle, shared by every request
    pub contacts: Arc<dyn ContactRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactRepository>, settings: Settings) -> Self {
        Self {
            contacts,
            settings: Arc::new(settings),
        }
    }

    /// Contact service bound to this state's storage handle
    pub fn contact_service(&self) -> ContactServiceImpl<dyn ContactRepository> {
        ContactServiceImpl::new(
            self.contacts.clone(),
            self.settings.contacts.birthday_window_days,
        )
    }
}

/// Router with every route and middleware layer applied
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(create_trace_layer())
        .layer(cors)
}

/// Open the configured contact storage
pub async fn connect_storage(settings: &Settings) -> Result<Arc<dyn ContactRepository>> {
    match settings.database.backend {
        StorageBackend::Postgres => {
            let url = settings
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;

            let pool = database::create_pool(&settings.database, url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Database connection pool created");

            database::ensure_schema(&pool)
                .await
                .context("Failed to create the contacts table")?;
            tracing::info!("Contacts table ready");

            Ok(Arc::new(PgContactRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory contact storage; data is lost on restart");
            Ok(Arc::new(InMemoryContactRepository::new()))
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let contacts = connect_storage(&settings).await?;
        let addr = settings.server_addr();

        let router = build_router(AppState::new(contacts, settings));

        let listener = TcpListener::bind(addr.as_str())
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves on Ctrl+C so in-flight requests can finish
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
