//! Employee entity model and the role enumeration.

use chrono::NaiveDate;
use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed set of employee roles, stored as the `employee_role` Postgres enum.
///
/// Wire format uses the SCREAMING_SNAKE_CASE names (`INTERN`, `JUNIOR`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "employee_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Intern,
    Junior,
    MidLevel,
    Senior,
    Manager,
}

impl Role {
    /// Wire names of every role, in declaration order.
    pub const NAMES: [&'static str; 5] =
        ["INTERN", "JUNIOR", "MID_LEVEL", "SENIOR", "MANAGER"];

    /// Error text for an unrecognized role value in a request body.
    pub fn unavailable_message() -> String {
        format!(
            "Unavailable Role. Available Roles: [{}]",
            Self::NAMES.join(", ")
        )
    }
}

/// A row from the `employees` table.
///
/// Identity is the store-assigned `id`: two rows are the same entity exactly
/// when their ids match, so equality ignores the remaining fields.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub salary: f64,
    pub hiring_date: NaiveDate,
    pub role: Role,
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

/// An employee that has not been persisted yet. Has no id; the store
/// assigns one on insert.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub salary: f64,
    pub hiring_date: NaiveDate,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(Role::MidLevel).unwrap(),
            serde_json::json!("MID_LEVEL")
        );
    }

    #[test]
    fn unknown_role_fails_deserialization() {
        assert!(serde_json::from_str::<Role>("\"NOT_A_ROLE\"").is_err());
    }

    #[test]
    fn unavailable_message_lists_every_role() {
        let message = Role::unavailable_message();
        for name in Role::NAMES {
            assert!(message.contains(name), "missing {name} in {message}");
        }
    }

    #[test]
    fn employee_equality_is_by_id_only() {
        let a = Employee {
            id: 1,
            name: "A".into(),
            salary: 1.0,
            hiring_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            role: Role::Intern,
        };
        let mut b = a.clone();
        b.name = "B".into();
        b.role = Role::Senior;
        assert_eq!(a, b);
    }
}
