//! Roster Server - employee / department / role HTTP service
//!
//! # Architecture
//!
//! - **Database** (`db`): SQLite pool, schema sync, sample data, one
//!   repository per table
//! - **Roster** (`roster`): relationship resolution, aggregation and the
//!   mutations that keep join rows consistent
//! - **HTTP API** (`api`): axum routers and thin handlers
//!
//! # Layout
//!
//! ```text
//! roster-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # pool, schema, seed, repositories
//! ├── roster/        # resolver, aggregator, mutations
//! ├── api/           # routes and handlers
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod roster;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and start logging
///
/// Production switches console output to JSON lines.
pub fn setup_environment() -> anyhow::Result<Config> {
    // Missing .env is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    let filter = format!(
        "roster_server={level},tower_http={level}",
        level = config.log_level
    );
    init_logger_with_file(&filter, config.is_production(), config.log_dir.as_deref())?;

    Ok(config)
}
