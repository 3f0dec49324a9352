//! Request middleware

pub mod auth;
pub mod correlation;

pub use auth::require_bearer_token;
pub use correlation::{correlation_middleware, CORRELATION_ID_HEADER};
