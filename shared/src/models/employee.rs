//! Employee Model

use serde::{Deserialize, Serialize};

use super::{Department, Role};
use crate::{Timestamp, serde_helpers};

/// Employee entity (attributes only, associations live in join tables)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Employee with its resolved department and role
///
/// Employee attributes are flattened into the top level; a missing
/// association serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    #[serde(flatten)]
    pub employee: Employee,
    pub department: Option<Department>,
    pub role: Option<Role>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub department_id: i64,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub role_id: i64,
}

/// Body of `POST /employees/new`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub new_employee: NewEmployee,
}

/// Partial update payload
///
/// Outer `None` = field absent (left unchanged).
/// `Some(None)` = field explicitly null (rejected by validation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, deserialize_with = "serde_helpers::patch")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "serde_helpers::patch")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "serde_helpers::patch_id")]
    pub department_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "serde_helpers::patch_id")]
    pub role_id: Option<Option<i64>>,
}

impl EmployeePatch {
    /// True when no field is present at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department_id.is_none()
            && self.role_id.is_none()
    }
}

/// Body of `POST /employees/delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: i64,
}
