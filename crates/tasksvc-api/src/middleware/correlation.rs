//! Correlation id and request logging middleware

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tasksvc_application::CorrelationId;

/// Header carrying the correlation id in both directions
pub static CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Requests slower than this are logged as warnings
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(100);

/// Attach a [`CorrelationId`] to the request and log its outcome
///
/// The id comes from the `x-correlation-id` header when present, otherwise
/// a fresh one is generated. It is echoed on the response.
pub async fn correlation_middleware(mut request: Request, next: Next) -> Response {
    let cid = request
        .headers()
        .get(&CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(CorrelationId::new)
        .unwrap_or_else(CorrelationId::generate);

    let method = request.method().clone();
    let uri = request.uri().clone();
    request.extensions_mut().insert(cid.clone());

    tracing::info!(correlation_id = %cid, "Request: {} {}", method, uri);

    let start = Instant::now();
    let mut response = next.run(request).await;
    let duration = start.elapsed();

    if duration > SLOW_REQUEST_THRESHOLD {
        tracing::warn!(correlation_id = %cid, "Slow request: {} {} took {:?}", method, uri, duration);
    }

    tracing::info!(
        correlation_id = %cid,
        "Response: {} {} - {} in {}ms",
        method,
        uri,
        response.status(),
        duration.as_millis()
    );

    if let Ok(value) = HeaderValue::from_str(cid.as_str()) {
        response
            .headers_mut()
            .insert(CORRELATION_ID_HEADER.clone(), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware::from_fn, routing::get, Extension, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(cid): Extension<CorrelationId>| async move { cid.to_string() }),
            )
            .layer(from_fn(correlation_middleware))
    }

    #[tokio::test]
    async fn test_incoming_id_is_used_and_echoed() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .header("x-correlation-id", "req-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-correlation-id"], "req-1");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"req-1");
    }

    #[tokio::test]
    async fn test_missing_id_is_generated() {
        let response = app()
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let echoed = response.headers()["x-correlation-id"].to_str().unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&echoed).is_ok());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), echoed);
    }
}
