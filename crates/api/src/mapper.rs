//! Pure conversions between the employee entity and its transfer object.
//!
//! No state, no side effects. The create direction never carries an id
//! forward; the store assigns one on insert.

use roster_db::models::employee::{Employee, NewEmployee};

use crate::dto::EmployeeDto;

/// Convert a persisted entity into its wire representation.
pub fn to_dto(employee: &Employee) -> EmployeeDto {
    EmployeeDto {
        id: Some(employee.id),
        name: Some(employee.name.clone()),
        salary: Some(employee.salary),
        hiring_date: Some(employee.hiring_date),
        role: Some(employee.role),
    }
}

/// Build an unsaved record from a transfer object, dropping any id.
///
/// Returns `None` when a required field is absent; callers validate the
/// DTO first, so `None` only signals a programming error upstream.
pub fn to_record(dto: &EmployeeDto) -> Option<NewEmployee> {
    Some(NewEmployee {
        name: dto.name.clone()?,
        salary: dto.salary?,
        hiring_date: dto.hiring_date?,
        role: dto.role?,
    })
}

/// Overwrite every non-id field of `employee` from the transfer object.
///
/// Full replace, not a partial patch. No-op when a source field is absent;
/// the id is never touched.
pub fn copy_into(dto: &EmployeeDto, employee: &mut Employee) {
    let (Some(name), Some(salary), Some(hiring_date), Some(role)) =
        (dto.name.as_ref(), dto.salary, dto.hiring_date, dto.role)
    else {
        return;
    };
    employee.name = name.clone();
    employee.salary = salary;
    employee.hiring_date = hiring_date;
    employee.role = role;
}
