//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check
//! - `/api/*`       - Mock frontend API, see [`crate::api::routes::ROUTE_TABLE`]
//! - anything else  - JSON 404 (`OPTIONS` answers 200)
//!
//! # Middleware
//!
//! - **CORS** - `Access-Control-Allow-*` headers on every response
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panicking handlers answer 500 JSON
//!
//! Trailing slash trimming wraps the router in [`crate::server`], since it
//! has to run before routing.

use axum::Router;
use axum::routing::get;

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{cors, panic, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allow_origin` - `Access-Control-Allow-Origin` value, `*` or one origin
pub fn app_router(state: AppState, allow_origin: &str) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .method_not_allowed_fallback(fallback_handler)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
        .layer(cors::layer(allow_origin))
}
