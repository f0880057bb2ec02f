//! School email verification configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of a verification code in minutes
pub const DEFAULT_CODE_EXPIRATION_MINUTES: i64 = 5;

/// Default id of the parent category grouping all school boards
pub const DEFAULT_SCHOOL_BOARDS_PARENT_ID: i64 = 1;

/// Verification workflow configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Server-side secret mixed into every code hash. Never defaulted.
    pub secret: Option<String>,

    /// Minutes a code stays valid after issuance
    pub code_expiration_minutes: i64,

    /// Failed confirmations allowed before a pending record is rejected (unset = unlimited)
    pub max_failed_attempts: Option<i32>,

    /// Category id whose children are school-scoped boards
    pub school_boards_parent_id: i64,

    /// Background sweep of stale pending records
    pub sweep: SweepConfig,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            secret: None,
            code_expiration_minutes: DEFAULT_CODE_EXPIRATION_MINUTES,
            max_failed_attempts: None,
            school_boards_parent_id: DEFAULT_SCHOOL_BOARDS_PARENT_ID,
            sweep: SweepConfig::default(),
        }
    }
}

impl VerificationConfig {
    /// Returns the secret if it is present and non-blank
    pub fn secret(&self) -> Option<&str> {
        self.secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Override fields from the well-known environment variables
    pub fn apply_env(&mut self) {
        if let Ok(secret) = std::env::var("VERIFICATION_SECRET") {
            self.secret = Some(secret);
        }
        if let Some(minutes) = std::env::var("VERIFICATION_CODE_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.code_expiration_minutes = minutes;
        }
        if let Some(max) = std::env::var("VERIFICATION_MAX_FAILED_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.max_failed_attempts = Some(max);
        }
        if let Some(parent) = std::env::var("SCHOOL_BOARDS_PARENT_ID")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.school_boards_parent_id = parent;
        }
        if let Some(enabled) = std::env::var("VERIFICATION_SWEEP_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.sweep.enabled = enabled;
        }
    }
}

/// Stale pending record sweep settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Whether the background sweep runs at all
    pub enabled: bool,
    /// Seconds between sweeps
    pub interval_seconds: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: 600,
        }
    }
}
