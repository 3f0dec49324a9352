//! Application state for the API server

use std::sync::Arc;
use std::time::Instant;

use tasksvc_application::TaskService;
use tasksvc_domain::StatusPolicy;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Task use cases
    pub task_service: Arc<dyn TaskService>,
    /// How create/update treat unrecognized statuses
    pub status_policy: StatusPolicy,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(task_service: Arc<dyn TaskService>, status_policy: StatusPolicy) -> Self {
        Self {
            task_service,
            status_policy,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
