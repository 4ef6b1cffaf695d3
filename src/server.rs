//! HTTP server initialization and runtime setup.
//!
//! Wires the selected storage backend, the alias generator, and the Axum
//! server lifecycle together.

use crate::config::{Config, StorageBackend};
use crate::application::services::UrlService;
use crate::domain::repositories::AliasStore;
use crate::infrastructure::persistence::{InMemoryAliasRepository, PgAliasRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The alias store (PostgreSQL pool + migrations, or in-memory)
/// - The random alias generator
/// - The Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let generator = Arc::new(RandomAliasGenerator::new());

    let url_service = Arc::new(UrlService::new(store, generator));
    let state = AppState::new(url_service, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the alias store selected by configuration.
async fn build_store(config: &Config) -> Result<Arc<dyn AliasStore>> {
    match config.storage {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL missing for postgres backend"))?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Ok(Arc::new(PgAliasRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; mappings will not survive a restart");
            Ok(Arc::new(InMemoryAliasRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        return;
    }

    tracing::info!("Shutdown signal received");
}
