//! Handlers for the `/employee` resource.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;

use roster_db::pagination::Page;

use crate::dto::EmployeeDto;
use crate::error::{ApiError, AppResult};
use crate::extract::{PageQuery, PathId, ValidatedJson};
use crate::state::AppState;

/// GET /employee/{id}
pub async fn find_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<EmployeeDto>> {
    tracing::debug!(id, "Request received to find employee");
    Ok(Json(state.service.find_by_id(id).await?))
}

/// GET /employee?page=&size=&sort=
pub async fn find_all(
    State(state): State<AppState>,
    PageQuery(request): PageQuery,
) -> AppResult<Json<Page<EmployeeDto>>> {
    tracing::debug!(
        page = request.page(),
        size = request.limit(),
        "Request received to find all employees"
    );
    Ok(Json(state.service.find_all(&request).await?))
}

/// POST /employee
///
/// Replies 201 with a `Location` header pointing at the created resource.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<EmployeeDto>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<EmployeeDto>)> {
    tracing::debug!("Request received to create employee");
    let saved = state.service.create(&dto).await?;
    let id = saved
        .id
        .ok_or_else(|| ApiError::Unexpected("created employee has no id".to_string()))?;
    let location = format!("/employee/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    ))
}

/// PUT /employee/{id}
///
/// The path id wins over any id in the body.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(dto): ValidatedJson<EmployeeDto>,
) -> AppResult<Json<EmployeeDto>> {
    tracing::debug!(id, "Request received to update employee");
    Ok(Json(state.service.update(id, &dto).await?))
}

/// DELETE /employee/{id}
pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    tracing::debug!(id, "Request received to delete employee");
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
