//! Schema sync
//!
//! `sync(pool, false)` creates missing tables; `sync(pool, true)` drops every
//! table first and recreates the schema from scratch. There is no
//! incremental migration path.

use sqlx::SqlitePool;

use super::repository::RepoResult;

/// Child tables first so foreign keys never dangle mid-drop
const DROP_ORDER: [&str; 5] = [
    "employee_role",
    "employee_department",
    "employee",
    "role",
    "department",
];

const CREATE_STATEMENTS: [&str; 7] = [
    r#"
    CREATE TABLE IF NOT EXISTS department (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS role (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employee (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
    // One department per employee
    r#"
    CREATE TABLE IF NOT EXISTS employee_department (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL UNIQUE,
        department_id INTEGER NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        FOREIGN KEY (employee_id) REFERENCES employee(id) ON DELETE CASCADE,
        FOREIGN KEY (department_id) REFERENCES department(id)
    )
    "#,
    // One role per employee
    r#"
    CREATE TABLE IF NOT EXISTS employee_role (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL UNIQUE,
        role_id INTEGER NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        FOREIGN KEY (employee_id) REFERENCES employee(id) ON DELETE CASCADE,
        FOREIGN KEY (role_id) REFERENCES role(id)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS idx_employee_department_department ON employee_department(department_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_employee_role_role ON employee_role(role_id)"#,
];

/// Create the schema, optionally dropping every table first
pub async fn sync(pool: &SqlitePool, force: bool) -> RepoResult<()> {
    if force {
        for table in DROP_ORDER {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(pool)
                .await?;
        }
        tracing::warn!("All tables dropped");
    }

    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_sync_creates_all_tables() {
        let db = DbService::in_memory().await.unwrap();
        assert_eq!(
            table_names(&db.pool).await,
            vec![
                "department",
                "employee",
                "employee_department",
                "employee_role",
                "role"
            ]
        );
    }

    #[tokio::test]
    async fn test_sync_is_idempotent_without_force() {
        let db = DbService::in_memory().await.unwrap();
        sqlx::query("INSERT INTO department (name, created_at, updated_at) VALUES ('Ops', 0, 0)")
            .execute(&db.pool)
            .await
            .unwrap();

        sync(&db.pool, false).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_force_sync_wipes_rows_and_resets_ids() {
        let db = DbService::in_memory().await.unwrap();
        for name in ["Ops", "Legal"] {
            sqlx::query("INSERT INTO department (name, created_at, updated_at) VALUES (?, 0, 0)")
                .bind(name)
                .execute(&db.pool)
                .await
                .unwrap();
        }

        sync(&db.pool, true).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO department (name, created_at, updated_at) VALUES ('HR', 0, 0) RETURNING id",
        )
        .fetch_one(&db.pool)
        .await
        .unwrap();
        assert_eq!(id, 1);
    }
}
