//! Sample data
//!
//! Drops and recreates the schema, then inserts a fixed roster:
//!
//! | Employee | Department | Role |
//! |----------|------------|------|
//! | Rahul Sharma | Engineering | Software Engineer |
//! | Priya Singh | Marketing | Marketing Specialist |
//! | Ankit Verma | Engineering | Product Manager |

use shared::models::{DepartmentCreate, RoleCreate};
use sqlx::SqlitePool;

use super::repository::{
    RepoResult, department, employee, employee_department, employee_role, role,
};
use super::schema;

const DEPARTMENTS: [&str; 2] = ["Engineering", "Marketing"];

const ROLES: [&str; 3] = ["Software Engineer", "Marketing Specialist", "Product Manager"];

/// (name, email, department index, role index)
const EMPLOYEES: [(&str, &str, usize, usize); 3] = [
    ("Rahul Sharma", "rahul.sharma@example.com", 0, 0),
    ("Priya Singh", "priya.singh@example.com", 1, 1),
    ("Ankit Verma", "ankit.verma@example.com", 0, 2),
];

/// Row counts written by [`seed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub roles: usize,
    pub employees: usize,
}

/// Wipe everything and load the sample roster
pub async fn seed(pool: &SqlitePool) -> RepoResult<SeedSummary> {
    schema::sync(pool, true).await?;

    let mut departments = Vec::with_capacity(DEPARTMENTS.len());
    for name in DEPARTMENTS {
        departments.push(
            department::create(pool, DepartmentCreate { name: name.into() }).await?,
        );
    }

    let mut roles = Vec::with_capacity(ROLES.len());
    for title in ROLES {
        roles.push(role::create(pool, RoleCreate { title: title.into() }).await?);
    }

    for (name, email, dept_idx, role_idx) in EMPLOYEES {
        let emp = employee::create(pool, name, email).await?;
        employee_department::create(pool, emp.id, departments[dept_idx].id).await?;
        employee_role::create(pool, emp.id, roles[role_idx].id).await?;
    }

    let summary = SeedSummary {
        departments: departments.len(),
        roles: roles.len(),
        employees: EMPLOYEES.len(),
    };
    tracing::info!(?summary, "Database seeded");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    #[tokio::test]
    async fn test_seed_loads_fixed_roster() {
        let pool = test_pool().await;
        let summary = seed(&pool).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                departments: 2,
                roles: 3,
                employees: 3
            }
        );

        let engineering = employee_department::find_by_department(&pool, 1)
            .await
            .unwrap();
        let ids: Vec<i64> = engineering.iter().map(|r| r.employee_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_seed_twice_starts_over() {
        let pool = test_pool().await;
        seed(&pool).await.unwrap();
        employee::create(&pool, "Extra Person", "extra@example.com")
            .await
            .unwrap();

        seed(&pool).await.unwrap();
        let all = employee::find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, 1);
    }
}
