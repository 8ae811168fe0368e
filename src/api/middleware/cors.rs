//! Cross-origin headers for the browser frontend.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer.
///
/// `allow_origin` is either `*` or one exact origin. Every response carries
/// `Access-Control-Allow-Origin`; preflights are answered with the allowed
/// methods (`GET, POST, OPTIONS`) and headers (`Content-Type, Authorization`).
pub fn layer(allow_origin: &str) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin(allow_origin))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

fn origin(allow_origin: &str) -> AllowOrigin {
    if allow_origin == "*" {
        return AllowOrigin::any();
    }

    match HeaderValue::from_str(allow_origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(e) => {
            tracing::warn!(%allow_origin, error = %e, "Invalid CORS origin, allowing any");
            AllowOrigin::any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(allow_origin: &str) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(layer(allow_origin))
    }

    #[tokio::test]
    async fn test_wildcard_origin_on_plain_request() {
        let response = app("*")
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn test_exact_origin() {
        let response = app("http://localhost:3000")
            .oneshot(
                Request::get("/ping")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("http://localhost:3000")
        );
    }

    #[tokio::test]
    async fn test_preflight_lists_methods_and_headers() {
        let response = app("*")
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/ping")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        let methods = response.headers()["access-control-allow-methods"]
            .to_str()
            .unwrap()
            .to_owned();
        assert!(methods.contains("GET"));
        assert!(methods.contains("POST"));
        assert!(methods.contains("OPTIONS"));
        let headers = response.headers()["access-control-allow-headers"]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(headers.contains("content-type"));
        assert!(headers.contains("authorization"));
    }
}
