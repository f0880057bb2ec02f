//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Bearer token verification
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email provider
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `verification` - School email verification workflow

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use verification::{SweepConfig, VerificationConfig};

/// Configuration problems detected before the server starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VERIFICATION_SECRET is not configured")]
    MissingVerificationSecret,

    #[error("JWT secret is not configured")]
    MissingJwtSecret,

    #[error("Default JWT secret must not be used in {0}")]
    DefaultJwtSecret(Environment),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Verification workflow configuration
    pub verification: VerificationConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Defaults for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        }
    }

    /// Apply the well-known (unprefixed) environment variables on top of this configuration
    pub fn apply_env(&mut self) {
        self.server.apply_env();
        self.database.apply_env();
        self.auth.apply_env();
        self.verification.apply_env();
        self.email.apply_env();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Check the configuration for values the server cannot run without
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verification.secret().is_none() {
            return Err(ConfigError::MissingVerificationSecret);
        }
        if self.auth.jwt.secret.trim().is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret(self.environment));
        }
        if self.verification.code_expiration_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "verification.code_expiration_minutes".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        self.validate_email()?;
        if matches!(self.verification.max_failed_attempts, Some(max) if max <= 0) {
            return Err(ConfigError::InvalidValue {
                field: "verification.max_failed_attempts".to_string(),
                reason: "must be positive when set".to_string(),
            });
        }
        Ok(())
    }

    fn validate_email(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        match self.email.provider.as_str() {
            "mock" if self.environment.is_production() => Err(invalid(
                "email.provider",
                "the mock provider cannot be used in production",
            )),
            "mock" => Ok(()),
            "http" if self.email.api_key().is_none() => {
                Err(invalid("email.api_key", "required for the http provider"))
            }
            "http" => Ok(()),
            _ => Err(invalid("email.provider", "expected \"http\" or \"mock\"")),
        }
    }
}
