//! Bearer-token gate for protected routes
//!
//! Only the header's shape is checked here; token verification happens
//! upstream of this service.

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::AuthErrorResponse;

const BEARER_PREFIX: &str = "Bearer ";

/// Reject requests without an `Authorization: Bearer <token>` header
pub async fn require_bearer_token(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(BEARER_PREFIX));

    if !authorized {
        tracing::debug!("Rejected {} {}: missing bearer token", request.method(), request.uri());
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthErrorResponse {
                error: "Authorization token is required".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
