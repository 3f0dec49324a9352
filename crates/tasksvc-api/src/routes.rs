//! API route definitions

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    handlers::{health, tasks},
    middleware::{correlation_middleware, require_bearer_token},
    state::AppState,
};

/// Routes behind the bearer-token gate
fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(tasks::create_task))
        .route(
            "/tasks/:id",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route_layer(from_fn(require_bearer_token))
}

/// Routes open to anonymous callers
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/public/tasks", get(tasks::list_tasks))
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    public_routes()
        .merge(protected_routes())
        .layer(from_fn(correlation_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        tasks::list_tasks,
        tasks::get_task,
        tasks::create_task,
        tasks::update_task,
        tasks::delete_task,
    ),
    components(schemas(
        crate::models::TaskPayload,
        crate::models::TaskResponse,
        crate::models::TaskListResponse,
        crate::models::TaskCreatedResponse,
        crate::models::ErrorResponse,
        crate::models::AuthErrorResponse,
        crate::models::HealthResponse,
    )),
    modifiers(&BearerSecurity),
    info(
        title = "TaskSvc API",
        version = "1.0.0",
        description = "Task management CRUD API"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_task_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/public/tasks"));
        assert!(paths.iter().any(|p| *p == "/tasks"));
        assert!(paths.iter().any(|p| *p == "/tasks/{id}"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }

    #[test]
    fn test_openapi_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
