//! DTOs for health check endpoint.

use serde::Serialize;

/// "Mock Backend is running"
pub const HEALTHY_MESSAGE: &str = "Mock Backend đang hoạt động";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
