//! Utilities - shared error, result and validation helpers
//!
//! - [`AppError`] - handler-facing error type
//! - [`AppResult`] - result alias
//! - [`AppJson`] - JSON body extractor that rejects with [`AppError`]
//! - logging setup and input validation

pub mod error;
pub mod json;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use json::AppJson;
pub use result::AppResult;
