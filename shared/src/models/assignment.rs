//! Employee ↔ Department / Role join rows
//!
//! One row per association. Both tables carry `UNIQUE(employee_id)`,
//! so an employee has at most one department and one role.

use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Employee → Department link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDepartment {
    pub id: i64,
    pub employee_id: i64,
    pub department_id: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Employee → Role link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRole {
    pub id: i64,
    pub employee_id: i64,
    pub role_id: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
