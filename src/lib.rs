//! Shared harness for the TaskSvc end-to-end suites
//!
//! Builds the full HTTP stack (router, service, in-memory gateway) and
//! offers small helpers for driving it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    BoxError, Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tasksvc_api::{create_router, AppState};
use tasksvc_application::DefaultTaskService;
use tasksvc_domain::StatusPolicy;
use tasksvc_persistence::InMemoryTaskGateway;
use tower::ServiceExt;

/// Bearer header value accepted by the auth gate
pub const TEST_TOKEN: &str = "Bearer e2e-token";

/// Full stack over a fresh in-memory store
pub struct TestApp {
    router: Router,
    gateway: Arc<InMemoryTaskGateway>,
}

impl TestApp {
    pub fn new(policy: StatusPolicy) -> Self {
        let gateway = Arc::new(InMemoryTaskGateway::new());
        let service = DefaultTaskService::new(gateway.clone());
        let router = create_router(AppState::new(Arc::new(service), policy));
        Self { router, gateway }
    }

    /// Direct access to the backing store
    pub fn gateway(&self) -> &InMemoryTaskGateway {
        &self.gateway
    }

    /// Send a request; `auth` adds the bearer header. An empty response
    /// body reads as `Value::Null`.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        auth: bool,
    ) -> Result<(StatusCode, Value), BoxError> {
        let mut builder = Request::builder().method(method).uri(uri);
        if auth {
            builder = builder.header(header::AUTHORIZATION, TEST_TOKEN);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }?;

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, value))
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new(StatusPolicy::Lenient)
    }
}
