//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limits
//! - Global timeouts
//!
//! Limit and timeout come from `Config`; everything else is fixed.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::header::HeaderName;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply HTTP-level middleware to the given Router.
///
/// Request-id layers wrap the error handler so that 408/500 responses built
/// from middleware errors still carry `x-request-id`.
pub fn apply(router: Router, timeout: Duration, body_limit_bytes: usize) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(HandleErrorLayer::new(middleware_error))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

/// timeout 以外の BoxError はここまで来ない想定。来たら 500
async fn middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        AppError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    async fn slow_handler() -> &'static str {
        tokio::time::sleep(Duration::from_millis(200)).await;
        "late"
    }

    fn app() -> Router {
        let router = Router::new()
            .route("/ok", get(ok_handler))
            .route("/upload", post(ok_handler))
            .route("/slow", get(slow_handler));
        apply(router, Duration::from_millis(50), 16)
    }

    #[tokio::test]
    async fn generates_request_id_when_missing() {
        let req = Request::builder().uri("/ok").body(Body::empty()).unwrap();

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let id = res.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn propagates_caller_request_id() {
        let req = Request::builder()
            .uri("/ok")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(Body::empty())
            .unwrap();

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.headers().get(REQUEST_ID_HEADER).unwrap(), "req-123");
    }

    #[tokio::test]
    async fn rejects_oversized_body() {
        let body = vec![b'x'; 64];
        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap();

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn slow_handler_times_out() {
        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn timeout_response_keeps_request_id() {
        let req = Request::builder()
            .uri("/slow")
            .header(REQUEST_ID_HEADER, "trace-me")
            .body(Body::empty())
            .unwrap();

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(res.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-me");
    }

    #[tokio::test]
    async fn timeout_response_gets_generated_request_id() {
        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(res.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn other_middleware_errors_are_internal() {
        let err: BoxError = "boom".into();
        assert!(matches!(middleware_error(err).await, AppError::Internal));
    }
}
