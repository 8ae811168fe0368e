//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::{HEALTHY_MESSAGE, HealthResponse};

/// Reports that the mock is up. There are no dependencies to check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "message": "Mock Backend đang hoạt động"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: HEALTHY_MESSAGE,
    })
}
