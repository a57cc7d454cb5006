//! EmployeeDepartment join-table Repository

use super::{RepoError, RepoResult};
use shared::models::EmployeeDepartment;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_id, department_id, created_at, updated_at";

/// Join rows of one employee, oldest first
pub async fn find_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<EmployeeDepartment>> {
    let rows = sqlx::query_as::<_, EmployeeDepartment>(&format!(
        "SELECT {COLUMNS} FROM employee_department WHERE employee_id = ? ORDER BY id"
    ))
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Join rows pointing at one department, oldest first
pub async fn find_by_department(
    pool: &SqlitePool,
    department_id: i64,
) -> RepoResult<Vec<EmployeeDepartment>> {
    let rows = sqlx::query_as::<_, EmployeeDepartment>(&format!(
        "SELECT {COLUMNS} FROM employee_department WHERE department_id = ? ORDER BY id"
    ))
    .bind(department_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    employee_id: i64,
    department_id: i64,
) -> RepoResult<EmployeeDepartment> {
    let now = shared::util::now_millis();
    let row = sqlx::query_as::<_, EmployeeDepartment>(&format!(
        "INSERT INTO employee_department (employee_id, department_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING {COLUMNS}"
    ))
    .bind(employee_id)
    .bind(department_id)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Remove every department link of an employee; returns rows removed
pub async fn delete_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM employee_department WHERE employee_id = ?")
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
    department_id: i64,
) -> RepoResult<EmployeeDepartment> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM employee_department WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let row = sqlx::query_as::<_, EmployeeDepartment>(&format!(
        "INSERT INTO employee_department (employee_id, department_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING {COLUMNS}"
    ))
    .bind(employee_id)
    .bind(department_id)
    .bind(now)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| RepoError::Database("Failed to link department".into()))?;

    tx.commit().await?;
    tracing::debug!(employee_id, department_id, removed, "Department link replaced");
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;
    use crate::db::repository::{department, employee};
    use shared::models::DepartmentCreate;

    async fn setup(pool: &SqlitePool) -> (i64, i64, i64) {
        let emp = employee::create(pool, "Rahul Sharma", "rahul.sharma@example.com")
            .await
            .unwrap();
        let eng = department::create(pool, DepartmentCreate { name: "Engineering".into() })
            .await
            .unwrap();
        let mkt = department::create(pool, DepartmentCreate { name: "Marketing".into() })
            .await
            .unwrap();
        (emp.id, eng.id, mkt.id)
    }

    #[tokio::test]
    async fn test_create_and_lookup_both_directions() {
        let pool = test_pool().await;
        let (emp, eng, _) = setup(&pool).await;

        let link = create(&pool, emp, eng).await.unwrap();
        assert_eq!(link.employee_id, emp);
        assert_eq!(link.department_id, eng);

        assert_eq!(find_by_employee(&pool, emp).await.unwrap(), vec![link.clone()]);
        assert_eq!(find_by_department(&pool, eng).await.unwrap(), vec![link]);
    }

    #[tokio::test]
    async fn test_second_link_for_same_employee_is_rejected() {
        let pool = test_pool().await;
        let (emp, eng, mkt) = setup(&pool).await;

        create(&pool, emp, eng).await.unwrap();
        let err = create(&pool, emp, mkt).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
        assert_eq!(find_by_employee(&pool, emp).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_swaps_the_link() {
        let pool = test_pool().await;
        let (emp, eng, mkt) = setup(&pool).await;
        create(&pool, emp, eng).await.unwrap();

        let link = replace(&pool, emp, mkt).await.unwrap();
        assert_eq!(link.department_id, mkt);

        let rows = find_by_employee(&pool, emp).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].department_id, mkt);
        assert!(find_by_department(&pool, eng).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_without_existing_link_inserts() {
        let pool = test_pool().await;
        let (emp, eng, _) = setup(&pool).await;

        replace(&pool, emp, eng).await.unwrap();
        assert_eq!(find_by_employee(&pool, emp).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_employee() {
        let pool = test_pool().await;
        let (emp, eng, _) = setup(&pool).await;
        create(&pool, emp, eng).await.unwrap();

        assert_eq!(delete_by_employee(&pool, emp).await.unwrap(), 1);
        assert_eq!(delete_by_employee(&pool, emp).await.unwrap(), 0);
    }
}
