//! Employee mutations
//!
//! Writes that keep the join tables in step with the employee row. Input is
//! validated and referenced departments / roles are checked before anything
//! is written, so a rejected request leaves the store untouched.

use shared::models::{EmployeeDetails, EmployeePatch, NewEmployee};
use shared::response::MessageResponse;
use sqlx::SqlitePool;

use super::aggregator::{compose_employee_details, get_employee_by_id};
use super::resolver::{resolve_department, resolve_role};
use crate::db::repository::{department, employee, employee_department, employee_role, role};
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, require_present, validate_email, validate_id, validate_required_text,
};

/// Association id in a patch that means "keep the current link"
const UNCHANGED_ID: i64 = 0;

/// Insert the employee plus exactly one department link and one role link
pub async fn create_employee(pool: &SqlitePool, data: NewEmployee) -> AppResult<EmployeeDetails> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_email(&data.email)?;
    validate_id(data.department_id, "departmentId")?;
    validate_id(data.role_id, "roleId")?;

    department::require(pool, data.department_id).await?;
    role::require(pool, data.role_id).await?;

    let created = employee::create(pool, data.name.trim(), data.email.trim()).await?;
    employee_department::create(pool, created.id, data.department_id).await?;
    employee_role::create(pool, created.id, data.role_id).await?;

    tracing::info!(
        employee_id = created.id,
        department_id = data.department_id,
        role_id = data.role_id,
        "Employee created"
    );
    Ok(compose_employee_details(pool, created).await?)
}

/// Apply a partial update; `Ok(None)` when the employee does not exist
///
/// Fields are independent: an association is only replaced when the new id
/// is non-zero and differs from the one currently resolved. Name and email
/// are only written when they differ from the stored row.
pub async fn update_employee(
    pool: &SqlitePool,
    id: i64,
    patch: EmployeePatch,
) -> AppResult<Option<EmployeeDetails>> {
    let Some(current) = employee::find_by_id(pool, id).await? else {
        return Ok(None);
    };
    if patch.is_empty() {
        return Ok(Some(compose_employee_details(pool, current).await?));
    }

    let name = match patch.name {
        Some(value) => {
            let value = require_present(value, "name")?;
            validate_required_text(&value, "name", MAX_NAME_LEN)?;
            Some(value.trim().to_string()).filter(|v| *v != current.name)
        }
        None => None,
    };
    let email = match patch.email {
        Some(value) => {
            let value = require_present(value, "email")?;
            validate_email(&value)?;
            Some(value.trim().to_string()).filter(|v| *v != current.email)
        }
        None => None,
    };

    let new_department = match patch.department_id.map(|v| require_present(v, "departmentId")) {
        None => None,
        Some(department_id) => match department_id? {
            UNCHANGED_ID => None,
            department_id => {
                validate_id(department_id, "departmentId")?;
                let linked = resolve_department(pool, id).await?.map(|d| d.id);
                if linked == Some(department_id) {
                    None
                } else {
                    department::require(pool, department_id).await?;
                    Some(department_id)
                }
            }
        },
    };
    let new_role = match patch.role_id.map(|v| require_present(v, "roleId")) {
        None => None,
        Some(role_id) => match role_id? {
            UNCHANGED_ID => None,
            role_id => {
                validate_id(role_id, "roleId")?;
                let linked = resolve_role(pool, id).await?.map(|r| r.id);
                if linked == Some(role_id) {
                    None
                } else {
                    role::require(pool, role_id).await?;
                    Some(role_id)
                }
            }
        },
    };

    if let Some(department_id) = new_department {
        employee_department::replace(pool, id, department_id).await?;
        tracing::info!(employee_id = id, department_id, "Employee department changed");
    }
    if let Some(role_id) = new_role {
        employee_role::replace(pool, id, role_id).await?;
        tracing::info!(employee_id = id, role_id, "Employee role changed");
    }
    if name.is_some() || email.is_some() {
        employee::update(pool, id, name.as_deref(), email.as_deref()).await?;
        tracing::info!(employee_id = id, "Employee attributes updated");
    }

    Ok(get_employee_by_id(pool, id).await?)
}

/// Remove the employee and every join row that references it
///
/// Callers check existence first; deleting an unknown id is a no-op that
/// still reports success.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> AppResult<MessageResponse> {
    let removed = employee::delete(pool, id).await?;
    let departments = employee_department::delete_by_employee(pool, id).await?;
    let roles = employee_role::delete_by_employee(pool, id).await?;

    if !removed {
        tracing::warn!(employee_id = id, "Delete requested for missing employee");
    }
    tracing::info!(employee_id = id, departments, roles, "Employee deleted");
    Ok(MessageResponse::new(format!(
        "Employee with ID {id} has been deleted."
    )))
}
