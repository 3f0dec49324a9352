//! In-Memory Gateway Implementation
//!
//! Thread-safe in-memory task collection. Suitable for testing and development.

mod task_gateway;

pub use task_gateway::InMemoryTaskGateway;
