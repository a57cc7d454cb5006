//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an email address: exactly one `@`, both sides non-empty, no whitespace.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(AppError::validation(format!(
                "email '{value}' must contain exactly one '@'"
            )));
        }
    };
    if local.is_empty() || domain.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(AppError::validation(format!("email '{value}' is malformed")));
    }
    Ok(())
}

/// Validate a referenced id (positive).
pub fn validate_id(value: i64, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be a positive integer (got {value})"
        )));
    }
    Ok(())
}

/// Parse a positive id taken from the URL path.
pub fn parse_id(raw: &str, field: &str) -> Result<i64, AppError> {
    let id = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid(format!("{field} must be an integer (got '{raw}')")))?;
    validate_id(id, field)?;
    Ok(id)
}

/// Unwrap a patch field that was sent explicitly; `null` is rejected.
pub fn require_present<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(format!("{field} cannot be cleared")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Priya", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("priya.singh@example.com").is_ok());
        assert!(validate_email("root@localhost").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn test_id() {
        assert!(validate_id(1, "departmentId").is_ok());
        assert!(validate_id(0, "departmentId").is_err());
        assert!(validate_id(-4, "roleId").is_err());
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present(Some(3), "roleId").unwrap(), 3);
        let err = require_present::<i64>(None, "roleId").unwrap_err();
        assert!(err.to_string().contains("roleId cannot be cleared"));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("2", "id").unwrap(), 2);
        assert_eq!(parse_id(" 7 ", "id").unwrap(), 7);
        assert!(matches!(parse_id("abc", "id"), Err(AppError::Invalid(_))));
        assert!(matches!(parse_id("0", "id"), Err(AppError::Validation(_))));
    }
}
