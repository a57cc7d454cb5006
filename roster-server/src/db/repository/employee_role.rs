//! EmployeeRole join-table Repository

use super::{RepoError, RepoResult};
use shared::models::EmployeeRole;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_id, role_id, created_at, updated_at";

/// Join rows of one employee, oldest first
pub async fn find_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<EmployeeRole>> {
    let rows = sqlx::query_as::<_, EmployeeRole>(&format!(
        "SELECT {COLUMNS} FROM employee_role WHERE employee_id = ? ORDER BY id"
    ))
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Join rows pointing at one role, oldest first
pub async fn find_by_role(
    pool: &SqlitePool,
    role_id: i64,
) -> RepoResult<Vec<EmployeeRole>> {
    let rows = sqlx::query_as::<_, EmployeeRole>(&format!(
        "SELECT {COLUMNS} FROM employee_role WHERE role_id = ? ORDER BY id"
    ))
    .bind(role_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    employee_id: i64,
    role_id: i64,
) -> RepoResult<EmployeeRole> {
    let now = shared::util::now_millis();
    let row = sqlx::query_as::<_, EmployeeRole>(&format!(
        "INSERT INTO employee_role (employee_id, role_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING {COLUMNS}"
    ))
    .bind(employee_id)
    .bind(role_id)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Remove every role link of an employee; returns rows removed
pub async fn delete_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM employee_role WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Destroy all links of the employee, then insert the single new one
///
/// Both statements share one transaction.
pub async fn replace(
    pool: &SqlitePool,
    employee_id: i64,
    role_id: i64,
) -> RepoResult<EmployeeRole> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM employee_role WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let row = sqlx::query_as::<_, EmployeeRole>(&format!(
        "INSERT INTO employee_role (employee_id, role_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING {COLUMNS}"
    ))
    .bind(employee_id)
    .bind(role_id)
    .bind(now)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| RepoError::Database("Failed to link role".into()))?;

    tx.commit().await?;
    tracing::debug!(employee_id, role_id, removed, "Role link replaced");
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;
    use crate::db::repository::{employee, role};
    use shared::models::RoleCreate;

    async fn setup(pool: &SqlitePool) -> (i64, i64, i64) {
        let emp = employee::create(pool, "Rahul Sharma", "rahul.sharma@example.com")
            .await
            .unwrap();
        let swe = role::create(pool, RoleCreate { title: "Software Engineer".into() })
            .await
            .unwrap();
        let pm = role::create(pool, RoleCreate { title: "Product Manager".into() })
            .await
            .unwrap();
        (emp.id, swe.id, pm.id)
    }

    #[tokio::test]
    async fn test_create_and_lookup_both_directions() {
        let pool = test_pool().await;
        let (emp, swe, _) = setup(&pool).await;

        let link = create(&pool, emp, swe).await.unwrap();
        assert_eq!(link.employee_id, emp);
        assert_eq!(link.role_id, swe);

        assert_eq!(find_by_employee(&pool, emp).await.unwrap(), vec![link.clone()]);
        assert_eq!(find_by_role(&pool, swe).await.unwrap(), vec![link]);
    }

    #[tokio::test]
    async fn test_second_link_for_same_employee_is_rejected() {
        let pool = test_pool().await;
        let (emp, swe, pm) = setup(&pool).await;

        create(&pool, emp, swe).await.unwrap();
        let err = create(&pool, emp, pm).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
        assert_eq!(find_by_employee(&pool, emp).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_swaps_the_link() {
        let pool = test_pool().await;
        let (emp, swe, pm) = setup(&pool).await;
        create(&pool, emp, swe).await.unwrap();

        let link = replace(&pool, emp, pm).await.unwrap();
        assert_eq!(link.role_id, pm);

        let rows = find_by_employee(&pool, emp).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].role_id, pm);
        assert!(find_by_role(&pool, swe).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_without_existing_link_inserts() {
        let pool = test_pool().await;
        let (emp, swe, _) = setup(&pool).await;

        replace(&pool, emp, swe).await.unwrap();
        assert_eq!(find_by_employee(&pool, emp).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_employee() {
        let pool = test_pool().await;
        let (emp, swe, _) = setup(&pool).await;
        create(&pool, emp, swe).await.unwrap();

        assert_eq!(delete_by_employee(&pool, emp).await.unwrap(), 1);
        assert_eq!(delete_by_employee(&pool, emp).await.unwrap(), 0);
    }
}
