//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//! JSON keys are camelCase.

pub mod assignment;
pub mod department;
pub mod employee;
pub mod role;

// Re-exports
pub use assignment::*;
pub use department::*;
pub use employee::*;
pub use role::*;
