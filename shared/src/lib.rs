//! Shared utilities and common types for the CampusBoard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The JSON error envelope returned by the API
//! - Email utilities (normalisation, domain extraction, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, EmailConfig, Environment, JwtConfig,
    LoggingConfig, ServerConfig, SweepConfig, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::email;
