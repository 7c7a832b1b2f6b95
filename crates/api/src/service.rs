//! Employee application service: one method per use case, each wrapping a
//! single unit of work against the repository. Owns the not-found decision;
//! everything else propagates unchanged to classification.

use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::pagination::{Page, PageRequest};
use roster_db::repositories::EmployeeRepo;
use roster_db::DbPool;

use crate::dto::EmployeeDto;
use crate::error::{ApiError, AppResult};
use crate::mapper;

#[derive(Clone)]
pub struct EmployeeService {
    pool: DbPool,
}

impl EmployeeService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Look up one employee by id.
    pub async fn find_by_id(&self, id: DbId) -> AppResult<EmployeeDto> {
        tracing::debug!(id, "Starting operation to find an employee");
        let employee = EmployeeRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id,
            })?;
        tracing::info!(id = employee.id, name = %employee.name, "Employee found");
        Ok(mapper::to_dto(&employee))
    }

    /// Fetch one page of employees, preserving the page metadata.
    ///
    /// An unknown sort property is rejected before any query is issued.
    pub async fn find_all(&self, request: &PageRequest) -> AppResult<Page<EmployeeDto>> {
        if let Some(sort) = request.sort.as_deref() {
            if !EmployeeRepo::is_sortable(sort) {
                return Err(CoreError::UnknownProperty(sort.to_string()).into());
            }
        }
        let page = EmployeeRepo::find_page(&self.pool, request).await?;
        tracing::info!(
            count = page.number_of_elements,
            total = page.total_elements,
            "Employee page loaded"
        );
        Ok(page.map(|employee| mapper::to_dto(&employee)))
    }

    /// Persist a new employee. The DTO's id, if any, is ignored; the store
    /// assigns one.
    pub async fn create(&self, dto: &EmployeeDto) -> AppResult<EmployeeDto> {
        let record = mapper::to_record(dto).ok_or_else(|| {
            ApiError::Core(CoreError::Validation(
                "employee payload is missing required fields".to_string(),
            ))
        })?;
        let saved = EmployeeRepo::insert(&self.pool, &record).await?;
        tracing::info!(id = saved.id, name = %saved.name, "Employee saved");
        Ok(mapper::to_dto(&saved))
    }

    /// Fully overwrite an existing employee's fields.
    ///
    /// Requires pre-existence: updating an absent id fails with not-found
    /// instead of silently creating a row.
    pub async fn update(&self, id: DbId, dto: &EmployeeDto) -> AppResult<EmployeeDto> {
        let not_found = || CoreError::NotFound {
            entity: "Employee",
            id,
        };
        let mut existing = EmployeeRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(not_found)?;
        mapper::copy_into(dto, &mut existing);
        let saved = EmployeeRepo::update(&self.pool, &existing)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(id = saved.id, "Employee updated");
        Ok(mapper::to_dto(&saved))
    }

    /// Remove one employee by id. Fails with not-found if no row exists,
    /// consistent with the find and update paths.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let deleted = EmployeeRepo::delete_by_id(&self.pool, id).await?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Employee",
                id,
            }
            .into());
        }
        tracing::info!(id, "Employee deleted");
        Ok(())
    }
}
