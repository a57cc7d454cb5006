//! Employee Repository
//!
//! Attribute rows only; associations are handled by the join-table
//! repositories.

use super::{RepoError, RepoResult};
use shared::SortOrder;
use shared::models::Employee;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, created_at, updated_at";

/// All employees in insertion order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees =
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employee ORDER BY id"))
            .fetch_all(pool)
            .await?;
    Ok(employees)
}

/// All employees ordered by name; id breaks ties in the same direction
pub async fn find_all_sorted_by_name(
    pool: &SqlitePool,
    order: SortOrder,
) -> RepoResult<Vec<Employee>> {
    let direction = order.as_sql();
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee ORDER BY name {direction}, id {direction}"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee =
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employee WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, name: &str, email: &str) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (name, email, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Update name and/or email in place; `None` keeps the stored value
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: Option<&str>,
    email: Option<&str>,
) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET name = COALESCE(?1, name), email = COALESCE(?2, email), updated_at = ?3 WHERE id = ?4",
    )
    .bind(name)
    .bind(email)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete; returns whether a row was removed
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
