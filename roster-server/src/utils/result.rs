//! Unified Result Types

use crate::AppError;

/// Application-level Result type
///
/// Used in HTTP handlers and roster operations
pub type AppResult<T> = Result<T, AppError>;
