//! API Response types
//!
//! Every endpoint answers with a small JSON envelope:
//!
//! ```json
//! { "employees": [ ... ] }
//! { "employee": { ... } }
//! { "message": "No employees found" }
//! { "error": "database is locked" }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::EmployeeDetails;

/// `{ "employees": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeDetails>,
}

impl EmployeeListResponse {
    pub fn new(employees: Vec<EmployeeDetails>) -> Self {
        Self { employees }
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// `{ "employee": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee: EmployeeDetails,
}

impl EmployeeResponse {
    pub fn new(employee: EmployeeDetails) -> Self {
        Self { employee }
    }
}

/// `{ "message": "..." }` (confirmations and not-found answers)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "error": "..." }` (validation and server failures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
