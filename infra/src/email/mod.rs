//! Email Service Module
//!
//! This module provides email delivery for verification codes. It includes an
//! HTTP transactional-mail provider and a mock implementation for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all email providers
//! - **Mock Implementation**: Console output for development
//! - **HTTP Provider**: JSON mail API over reqwest with a bearer key
//! - **Security**: Address masking in logs

pub mod email_service;
pub mod email_trait_adapter;
pub mod http_email;
pub mod mock_email;

// Re-export commonly used types
pub use email_service::{verification_message, EmailMessage, EmailService};
pub use email_trait_adapter::EmailServiceAdapter;
pub use http_email::HttpEmailService;
pub use mock_email::MockEmailService;

use cb_shared::config::{EmailConfig, Environment};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Returns the implementation named by `config.provider`. The console mock is
/// refused in production and only prints message bodies in development.
///
/// # Errors
///
/// `InfrastructureError::Config` for an unknown provider, for the mock in
/// production, or for an HTTP provider that cannot be built.
pub fn create_email_service(
    config: &EmailConfig,
    environment: Environment,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" if environment.is_production() => Err(InfrastructureError::Config(
            "The mock email provider cannot be used in production".to_string(),
        )),
        "mock" => Ok(Box::new(MockEmailService::for_environment(environment))),
        "http" => {
            let service = HttpEmailService::new(config.clone()).map_err(|e| {
                tracing::error!("Failed to initialize HTTP email service: {}", e);
                e
            })?;
            Ok(Box::new(service))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unknown email provider: {}",
            other
        ))),
    }
}
