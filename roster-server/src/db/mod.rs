//! Database Module
//!
//! Handles the SQLite connection pool, schema sync and sample data.

pub mod repository;
pub mod schema;
pub mod seed;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service; owns the SQLite connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database at `database_url` and make sure every table exists
    ///
    /// File databases run in WAL mode. `sqlite::memory:` URLs are pinned to a
    /// single long-lived connection, otherwise every pooled connection would
    /// see its own empty database.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let in_memory = database_url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .optimize_on_close(true, None);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            url = %database_url,
            in_memory,
            "Database connection established"
        );

        schema::sync(&pool, false)
            .await
            .map_err(|e| AppError::database(format!("Failed to create tables: {e}")))?;
        tracing::info!("Database tables initialized");

        Ok(Self { pool })
    }

    /// Fresh private in-memory database (tests, throwaway runs)
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::new("sqlite::memory:", 1).await
    }
}
