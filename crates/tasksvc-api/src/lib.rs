//! TaskSvc RESTful API
//!
//! HTTP surface for task CRUD: request validation, the bearer-token gate,
//! the uniform error envelope and the OpenAPI document.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_router;
pub use server::ApiServer;
pub use state::AppState;
