//! Shared types for the roster service
//!
//! Entity rows, request payloads and response envelopes used by the
//! server and by anything talking to it over HTTP.

pub mod models;
pub mod response;
pub mod serde_helpers;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::{SortOrder, Timestamp};
