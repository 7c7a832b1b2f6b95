//! Route definitions for the employee resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Routes mounted at `/employee`.
///
/// ```text
/// GET    /        -> find_all (paginated, ?page=&size=&sort=)
/// POST   /        -> create
/// GET    /{id}    -> find_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employee::find_all).post(employee::create))
        .route(
            "/{id}",
            get(employee::find_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
}
