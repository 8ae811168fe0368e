//! Request body extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that does not require a `Content-Type` header.
///
/// The frontend posts with whatever header its HTTP client picks, so the body
/// is parsed as JSON unconditionally. An unreadable, malformed or wrongly
/// shaped body is rejected with 400 `{"error": "Invalid JSON data"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(%path, error = %e, "Failed to read request body");
            AppError::invalid_json()
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::warn!(%path, error = %e, "Rejected malformed JSON body");
            AppError::invalid_json()
        })
    }
}
