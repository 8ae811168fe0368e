#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use cinevision_mock::api::middleware::{cors, panic};
use cinevision_mock::domain::clock::FixedClock;
use cinevision_mock::domain::entities::AdminCredentials;
use cinevision_mock::infrastructure::fixtures::FixtureCatalog;
use cinevision_mock::routes::app_router;
use cinevision_mock::state::AppState;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// 2024-10-30 10:40:37 UTC.
pub const NOW: i64 = 1_730_284_837;

pub const ADMIN_EMAIL: &str = "admin@cinevision.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn create_test_state() -> AppState {
    let catalog = FixtureCatalog::embedded().unwrap();

    AppState::new(
        Arc::new(catalog),
        Arc::new(FixedClock::at_unix(NOW)),
        AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD),
    )
}

/// The full application router, as served, over the embedded fixtures.
pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state(), "*")).unwrap()
}

/// Same as [`create_test_server`] with trailing slash trimming in front.
pub fn create_normalized_test_server() -> TestServer {
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(create_test_state(), "*"));
    TestServer::new(Router::new().fallback_service(app)).unwrap()
}

async fn boom() -> &'static str {
    panic!("fixture exploded")
}

/// A route that always panics, behind the same recovery and CORS layers.
pub fn create_panicking_test_server() -> TestServer {
    let app = Router::new()
        .route("/boom", get(boom))
        .layer(panic::layer())
        .layer(cors::layer("*"));
    TestServer::new(app).unwrap()
}
