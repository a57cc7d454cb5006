//! Department Repository

use super::{RepoError, RepoResult};
use shared::models::{Department, DepartmentCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department =
        sqlx::query_as::<_, Department>(&format!("SELECT {COLUMNS} FROM department WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(department)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO department (name, created_at, updated_at) VALUES (?1, ?2, ?2) RETURNING id",
    )
    .bind(&data.name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".into()))
}

/// Existing department or `NotFound`
pub async fn require(pool: &SqlitePool, id: i64) -> RepoResult<Department> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))
}
