//! HTTP server initialization and runtime setup.
//!
//! Handles fixture loading, state wiring, and the Axum server lifecycle.

use crate::api::routes::ROUTE_TABLE;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::fixtures::FixtureCatalog;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Fixture catalog (embedded or `FIXTURES_PATH`)
/// - Application state with the system clock
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The fixture document cannot be loaded or fails validation
/// - The listen address is invalid or the bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = FixtureCatalog::load(config.fixtures_path.as_deref())?;
    let summary = catalog.summary();
    tracing::info!(
        movies = summary.movies,
        saloons = summary.saloons,
        showtimes = summary.showtimes,
        "Fixtures loaded"
    );

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(SystemClock),
        config.admin_credentials(),
    );

    let router = app_router(state, &config.cors_allow_origin);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    log_banner(addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Logs the listen URL and every endpoint the mock answers.
fn log_banner(addr: SocketAddr) {
    tracing::info!("Mock backend listening on http://{addr}");
    tracing::info!("Available endpoints:");
    for route in ROUTE_TABLE {
        tracing::info!("  {:<4} {}", route.method, route.path);
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
