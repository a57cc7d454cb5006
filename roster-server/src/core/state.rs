use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::{DbService, seed};

/// Server state handed to every handler
///
/// Cloning is cheap: `Config` is small and the pool is reference counted.
///
/// # Example
///
/// ```ignore
/// let employees = roster::list_all_employees(state.pool()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite pool service
    pub db: DbService,
}

impl ServerState {
    /// Manual construction; usually [`ServerState::initialize`] is used instead
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Open the database, sync the schema and optionally seed it
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;

        if config.seed_on_start {
            let summary = seed::seed(&db.pool)
                .await
                .map_err(|e| crate::core::ServerError::Database(e.to_string()))?;
            tracing::info!(?summary, "Sample roster loaded at startup");
        }

        Ok(Self::new(config.clone(), db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
