//! Repository Module
//!
//! Free functions over an explicitly passed `SqlitePool`, one module per
//! table. Queries are checked at runtime (`sqlx::query_as`), so building
//! the crate needs no live database.

pub mod department;
pub mod employee;
pub mod employee_department;
pub mod employee_role;
pub mod role;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
