//! Employee aggregator
//!
//! Joins employee rows with their resolved department and role into
//! [`EmployeeDetails`], the shape every read endpoint returns.

use shared::SortOrder;
use shared::models::{Employee, EmployeeDetails};
use sqlx::SqlitePool;

use super::resolver::{resolve_department, resolve_role};
use crate::db::repository::{RepoResult, employee, employee_department, employee_role};

pub async fn compose_employee_details(
    pool: &SqlitePool,
    employee: Employee,
) -> RepoResult<EmployeeDetails> {
    let department = resolve_department(pool, employee.id).await?;
    let role = resolve_role(pool, employee.id).await?;
    Ok(EmployeeDetails {
        employee,
        department,
        role,
    })
}

async fn compose_all(
    pool: &SqlitePool,
    employees: Vec<Employee>,
) -> RepoResult<Vec<EmployeeDetails>> {
    let mut details = Vec::with_capacity(employees.len());
    for employee in employees {
        details.push(compose_employee_details(pool, employee).await?);
    }
    Ok(details)
}

/// Dereference join rows to employees, dropping rows whose employee is gone
async fn employees_for_links(
    pool: &SqlitePool,
    employee_ids: Vec<i64>,
) -> RepoResult<Vec<Employee>> {
    let mut employees = Vec::with_capacity(employee_ids.len());
    for employee_id in employee_ids {
        match employee::find_by_id(pool, employee_id).await? {
            Some(found) => employees.push(found),
            None => tracing::warn!(employee_id, "Join row points at a missing employee"),
        }
    }
    Ok(employees)
}

/// Every employee, ordered by id
pub async fn list_all_employees(pool: &SqlitePool) -> RepoResult<Vec<EmployeeDetails>> {
    let employees = employee::find_all(pool).await?;
    compose_all(pool, employees).await
}

/// `None` when no employee has this id
pub async fn get_employee_by_id(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<EmployeeDetails>> {
    match employee::find_by_id(pool, id).await? {
        Some(found) => Ok(Some(compose_employee_details(pool, found).await?)),
        None => Ok(None),
    }
}

/// Employees linked to the department, in link order
pub async fn list_by_department(
    pool: &SqlitePool,
    department_id: i64,
) -> RepoResult<Vec<EmployeeDetails>> {
    let links = employee_department::find_by_department(pool, department_id).await?;
    let employee_ids = links.iter().map(|l| l.employee_id).collect();
    let employees = employees_for_links(pool, employee_ids).await?;
    compose_all(pool, employees).await
}

/// Employees linked to the role, in link order
pub async fn list_by_role(pool: &SqlitePool, role_id: i64) -> RepoResult<Vec<EmployeeDetails>> {
    let links = employee_role::find_by_role(pool, role_id).await?;
    let employee_ids = links.iter().map(|l| l.employee_id).collect();
    let employees = employees_for_links(pool, employee_ids).await?;
    compose_all(pool, employees).await
}

pub async fn list_sorted_by_name(
    pool: &SqlitePool,
    order: SortOrder,
) -> RepoResult<Vec<EmployeeDetails>> {
    let employees = employee::find_all_sorted_by_name(pool, order).await?;
    compose_all(pool, employees).await
}
