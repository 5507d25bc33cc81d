//! HTTP adapters - the inbound webhook surface.
//!
//! `app_router` assembles the routes with the request-id and tracing layers
//! used by the binary.

pub mod access;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use access::{access_routes, AccessAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the complete application router.
///
/// Every request gets an `x-request-id` (kept when the caller sent one),
/// which is recorded on the request span and echoed in the response.
pub fn app_router(state: AccessAppState) -> Router {
    access_routes()
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default();
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use crate::adapters::github::MockGitHub;
    use crate::domain::access::SellerVerifier;

    fn test_state() -> AccessAppState {
        let github = MockGitHub::new();
        AccessAppState::new(
            Arc::new(github.clone()),
            Arc::new(github),
            SellerVerifier::new(SecretString::new("S1".to_string())),
        )
    }

    #[tokio::test]
    async fn response_carries_generated_request_id() {
        let response = app_router(test_state())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn caller_request_id_is_kept() {
        let response = app_router(test_state())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "gumroad-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            "gumroad-123"
        );
    }
}
