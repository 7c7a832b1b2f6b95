pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health             liveness + database ping
/// /employee           list (paginated), create
/// /employee/{id}      get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/employee", employee::router())
}
