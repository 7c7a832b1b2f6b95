//! Repository for the `employees` table.

use sqlx::PgPool;

use roster_core::types::DbId;

use crate::models::employee::{Employee, NewEmployee};
use crate::pagination::{Page, PageRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, salary, hiring_date, role";

/// Properties a page request may sort by. Matches the entity fields; the
/// service layer rejects anything else before a query is issued.
const SORTABLE_COLUMNS: [&str; 5] = ["id", "name", "salary", "hiring_date", "role"];

/// Provides CRUD and pagination over employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Whether `property` is a valid sort target.
    pub fn is_sortable(property: &str) -> bool {
        SORTABLE_COLUMNS.contains(&property)
    }

    /// Insert a new employee, returning the created row with its
    /// store-assigned id.
    pub async fn insert(pool: &PgPool, input: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, salary, hiring_date, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(input.salary)
            .bind(input.hiring_date)
            .bind(input.role)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of employees.
    ///
    /// Without a sort property, rows come back in insertion order (by id).
    /// The sort property must already be validated; an unknown value falls
    /// back to id ordering rather than reaching the SQL text.
    pub async fn find_page(
        pool: &PgPool,
        request: &PageRequest,
    ) -> Result<Page<Employee>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await?;

        let order_by = request
            .sort
            .as_deref()
            .filter(|property| Self::is_sortable(property))
            .unwrap_or("id");
        let query = format!(
            "SELECT {COLUMNS} FROM employees ORDER BY {order_by} LIMIT $1 OFFSET $2"
        );
        let content = sqlx::query_as::<_, Employee>(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(content, request, total))
    }

    /// Overwrite every non-id column of an existing row.
    ///
    /// Returns `None` if no row with `employee.id` exists.
    pub async fn update(
        pool: &PgPool,
        employee: &Employee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET name = $2, salary = $3, hiring_date = $4, role = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(employee.id)
            .bind(&employee.name)
            .bind(employee.salary)
            .bind(employee.hiring_date)
            .bind(employee.role)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by id. Returns whether a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of employees.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await
    }
}
