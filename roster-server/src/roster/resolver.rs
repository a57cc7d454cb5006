//! Relationship resolver
//!
//! Employee id → join rows → referenced Department / Role. No existence
//! check on the employee itself; an unknown id simply has no links.

use shared::models::{Department, Role};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, department, employee_department, employee_role, role};

/// Department linked to the employee, if any
///
/// Join rows are walked oldest first and the last one that still points at
/// an existing department wins. The unique constraint keeps that to a
/// single row in practice.
pub async fn resolve_department(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Option<Department>> {
    let links = employee_department::find_by_employee(pool, employee_id).await?;
    if links.len() > 1 {
        tracing::warn!(employee_id, links = links.len(), "Employee has several department links");
    }

    let mut resolved = None;
    for link in links {
        match department::find_by_id(pool, link.department_id).await? {
            Some(found) => resolved = Some(found),
            None => tracing::warn!(
                employee_id,
                department_id = link.department_id,
                "Department link points at a missing department"
            ),
        }
    }
    Ok(resolved)
}

/// Role linked to the employee, if any (same rules as [`resolve_department`])
pub async fn resolve_role(pool: &SqlitePool, employee_id: i64) -> RepoResult<Option<Role>> {
    let links = employee_role::find_by_employee(pool, employee_id).await?;
    if links.len() > 1 {
        tracing::warn!(employee_id, links = links.len(), "Employee has several role links");
    }

    let mut resolved = None;
    for link in links {
        match role::find_by_id(pool, link.role_id).await? {
            Some(found) => resolved = Some(found),
            None => tracing::warn!(
                employee_id,
                role_id = link.role_id,
                "Role link points at a missing role"
            ),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::employee;
    use crate::roster::test_support::seeded_pool;

    #[tokio::test]
    async fn test_resolves_seeded_links() {
        let pool = seeded_pool().await;

        let dept = resolve_department(&pool, 2).await.unwrap().unwrap();
        assert_eq!(dept.name, "Marketing");

        let role = resolve_role(&pool, 3).await.unwrap().unwrap();
        assert_eq!(role.title, "Product Manager");
    }

    #[tokio::test]
    async fn test_unlinked_employee_resolves_to_none() {
        let pool = seeded_pool().await;
        let loner = employee::create(&pool, "Loner", "loner@example.com")
            .await
            .unwrap();

        assert!(resolve_department(&pool, loner.id).await.unwrap().is_none());
        assert!(resolve_role(&pool, loner.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_employee_resolves_to_none() {
        let pool = seeded_pool().await;
        assert!(resolve_department(&pool, 999).await.unwrap().is_none());
        assert!(resolve_role(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dangling_link_is_skipped() {
        let pool = seeded_pool().await;
        // Bypass the foreign key to simulate a link left behind by an older schema
        sqlx::query("PRAGMA foreign_keys = OFF").execute(&pool).await.unwrap();
        sqlx::query("DELETE FROM department WHERE id = 2")
            .execute(&pool)
            .await
            .unwrap();

        assert!(resolve_department(&pool, 2).await.unwrap().is_none());
    }
}
