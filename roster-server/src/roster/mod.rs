//! Roster core
//!
//! Relationship handling between employees and their department / role:
//!
//! - [`resolver`] - follow join rows from an employee to its department / role
//! - [`aggregator`] - compose employee rows with their resolved relations
//! - [`mutation`] - create / update / delete that keep join rows in step
//!
//! Every operation takes the pool explicitly; nothing here holds state.

pub mod aggregator;
pub mod mutation;
pub mod resolver;

pub use aggregator::{
    compose_employee_details, get_employee_by_id, list_all_employees, list_by_department,
    list_by_role, list_sorted_by_name,
};
pub use mutation::{create_employee, delete_employee, update_employee};
pub use resolver::{resolve_department, resolve_role};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use sqlx::SqlitePool;

    /// In-memory database loaded with the sample roster
    pub async fn seeded_pool() -> SqlitePool {
        let pool = DbService::in_memory().await.unwrap().pool;
        crate::db::seed::seed(&pool).await.unwrap();
        pool
    }
}
