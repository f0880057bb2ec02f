//! Configuration for the verification service

use chrono::Duration;
use cb_shared::config::VerificationConfig;

use crate::domain::entities::verification_record::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
    /// Incorrect confirmations allowed before the record is rejected; `None` disables the cap
    pub max_failed_attempts: Option<i32>,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_failed_attempts: None,
        }
    }
}

impl VerificationServiceConfig {
    /// Lifetime of an issued code
    pub fn expiry_window(&self) -> Duration {
        Duration::minutes(self.code_expiration_minutes)
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_expiration_minutes: config.code_expiration_minutes,
            max_failed_attempts: config.max_failed_attempts,
        }
    }
}
