//! Role Repository

use super::{RepoError, RepoResult};
use shared::models::{Role, RoleCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, title, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Role>> {
    let role =
        sqlx::query_as::<_, Role>(&format!("SELECT {COLUMNS} FROM role WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(role)
}

pub async fn create(pool: &SqlitePool, data: RoleCreate) -> RepoResult<Role> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO role (title, created_at, updated_at) VALUES (?1, ?2, ?2) RETURNING id",
    )
    .bind(&data.title)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create role".into()))
}

/// Existing role or `NotFound`
pub async fn require(pool: &SqlitePool, id: i64) -> RepoResult<Role> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Role {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let created = create(&pool, RoleCreate { title: "Product Manager".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.created_at, created.updated_at);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_require_missing_is_not_found() {
        let pool = test_pool().await;
        let err = require(&pool, 42).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(ref m) if m == "Role 42 not found"));
    }
}
