//! Panic recovery: a panicking handler answers 500 instead of dropping the connection.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Converts handler panics into `500 {"error": "<panic message>"}`.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "Internal server error".to_owned()
    };

    tracing::error!(%message, "Handler panicked");
    AppError::internal(message, Value::Null).into_response()
}
