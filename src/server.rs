//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, link service and router, then runs the Axum
//! server until Ctrl-C.

use crate::application::services::LinkService;
use crate::config::{Config, StorageKind};
use crate::domain::repositories::ShortenedUrlRepository;
use crate::infrastructure::persistence::{FileManifestRepository, InMemoryRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Creates the repository selected by `config.storage`.
pub fn build_repository(config: &Config) -> Arc<dyn ShortenedUrlRepository> {
    match config.storage {
        StorageKind::File => Arc::new(FileManifestRepository::new(&config.data_dir)),
        StorageKind::Memory => Arc::new(InMemoryRepository::new()),
    }
}

/// Builds the shared state for a configuration.
pub fn build_state(config: &Config) -> AppState {
    let link_service = LinkService::new(build_repository(config))
        .with_max_code_attempts(config.max_code_attempts);

    AppState::new(Arc::new(link_service), config.public_host.as_str())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (file or memory)
/// - Link service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// An unreadable manifest is reported at startup but does not stop the
/// server; affected requests fail with 500 and `/health` reports 503.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);

    match state.link_service.count().await {
        Ok(links) => tracing::info!(
            storage = state.link_service.storage_kind(),
            links,
            "Storage ready"
        ),
        Err(e) => tracing::warn!(
            storage = state.link_service.storage_kind(),
            error = %e,
            "Storage not readable at startup"
        ),
    }

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
