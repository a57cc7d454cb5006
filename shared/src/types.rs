//! Common types for the shared crate

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Ordering for name-sorted listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for an `ORDER BY` clause
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(format!("Invalid sort order '{other}', expected ASC or DESC")),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!(" Desc ".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sideways".parse::<SortOrder>().unwrap_err();
        assert!(err.contains("SIDEWAYS"));
    }
}
