//! Handler for requests no route accepts.

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::AppError;

/// Answers unknown paths, and known paths called with the wrong method.
///
/// - `POST`: 404 `POST endpoint not found`
/// - anything else: 404 `Endpoint not found`
///
/// `OPTIONS` never gets here; the CORS layer answers it first.
pub async fn fallback_handler(method: Method, uri: Uri) -> Response {
    tracing::warn!(%method, path = %uri.path(), "Endpoint not found");

    let message = if method == Method::POST {
        "POST endpoint not found"
    } else {
        "Endpoint not found"
    };
    AppError::not_found(message, Value::Null).into_response()
}
