use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::EmployeeService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks, test setup).
    pub pool: roster_db::DbPool,
    /// The employee application service.
    pub service: EmployeeService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: roster_db::DbPool, config: ServerConfig) -> Self {
        Self {
            service: EmployeeService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
