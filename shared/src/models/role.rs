//! Role Model

use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Role entity (job title)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create role payload (seed only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub title: String,
}
