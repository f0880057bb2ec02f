//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned by every API endpoint on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message (localized)
    pub error: String,

    /// Stable error code for client identification
    pub code: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const SCHOOL_NOT_FOUND: &str = "SCHOOL_NOT_FOUND";
    pub const EMAIL_DOMAIN_NOT_ALLOWED: &str = "EMAIL_DOMAIN_NOT_ALLOWED";
    pub const INVALID_VERIFICATION_STATE: &str = "INVALID_VERIFICATION_STATE";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
    pub const VERIFICATION_CODE_EXPIRED: &str = "VERIFICATION_CODE_EXPIRED";
    pub const VERIFICATION_ATTEMPTS_EXHAUSTED: &str = "VERIFICATION_ATTEMPTS_EXHAUSTED";
    pub const EMAIL_DELIVERY_FAILED: &str = "EMAIL_DELIVERY_FAILED";
    pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
}
