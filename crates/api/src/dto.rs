//! Wire-format representation of an employee.

use chrono::NaiveDate;
use roster_core::types::DbId;
use roster_db::models::employee::Role;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Employee transfer object at the API boundary.
///
/// Every non-id field is `Option` so that an absent or null value survives
/// JSON binding and is reported as a declared field-validation failure
/// (with its specific message) instead of a parse failure. After
/// `validate()` succeeds, all required fields are `Some`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Ignored on create; overridden by the path id on update.
    pub id: Option<DbId>,

    #[validate(
        required(message = "The name can't be null"),
        custom(function = not_blank, message = "Name can't be blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The salary can't be null"),
        range(exclusive_min = 0.0, message = "The salary must be positive")
    )]
    pub salary: Option<f64>,

    #[validate(required(message = "The hiring date can't be null"))]
    pub hiring_date: Option<NaiveDate>,

    #[validate(required(message = "You must specify the employee role"))]
    pub role: Option<Role>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> EmployeeDto {
        EmployeeDto {
            id: None,
            name: Some("Name".to_string()),
            salary: Some(1.00),
            hiring_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            role: Some(Role::Intern),
        }
    }

    fn messages_for(dto: &EmployeeDto, field: &str) -> Vec<String> {
        let errors = dto.validate().unwrap_err();
        errors
            .field_errors()
            .into_iter()
            .filter(|(name, _)| *name == field)
            .flat_map(|(_, errs)| {
                errs.iter()
                    .map(|e| e.message.as_ref().map(|m| m.to_string()).unwrap_or_default())
            })
            .collect()
    }

    #[test]
    fn valid_dto_passes() {
        assert!(base_dto().validate().is_ok());
    }

    #[test]
    fn null_name_is_rejected() {
        let mut dto = base_dto();
        dto.name = None;
        assert!(messages_for(&dto, "name").contains(&"The name can't be null".to_string()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut dto = base_dto();
        dto.name = Some("   ".to_string());
        assert!(messages_for(&dto, "name").contains(&"Name can't be blank".to_string()));
    }

    #[test]
    fn zero_salary_is_rejected() {
        let mut dto = base_dto();
        dto.salary = Some(0.00);
        assert!(messages_for(&dto, "salary").contains(&"The salary must be positive".to_string()));
    }

    #[test]
    fn negative_salary_is_rejected() {
        let mut dto = base_dto();
        dto.salary = Some(-1.00);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn null_salary_hiring_date_and_role_are_rejected() {
        let dto = EmployeeDto {
            id: None,
            name: Some("Name".to_string()),
            salary: None,
            hiring_date: None,
            role: None,
        };
        assert!(messages_for(&dto, "salary").contains(&"The salary can't be null".to_string()));
        assert!(messages_for(&dto, "hiring_date")
            .contains(&"The hiring date can't be null".to_string()));
        assert!(
            messages_for(&dto, "role").contains(&"You must specify the employee role".to_string())
        );
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let json = serde_json::to_value(base_dto()).unwrap();
        assert_eq!(json["hiringDate"], "2000-01-01");
        assert_eq!(json["role"], "INTERN");
    }
}
