//! Email Service Trait Adapter
//!
//! Implements the core EmailServiceTrait on top of any infrastructure
//! EmailService, bridging the infrastructure implementation with the core
//! domain trait.

use async_trait::async_trait;
use cb_core::services::verification::EmailServiceTrait;

use super::email_service::{verification_message, EmailService};

/// Adapter that implements the core EmailServiceTrait
pub struct EmailServiceAdapter {
    inner: Box<dyn EmailService>,
    code_expiration_minutes: i64,
}

impl EmailServiceAdapter {
    /// Wrap an email service; the expiry is quoted in the message body
    pub fn new(inner: Box<dyn EmailService>, code_expiration_minutes: i64) -> Self {
        Self {
            inner,
            code_expiration_minutes,
        }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl EmailServiceTrait for EmailServiceAdapter {
    async fn send_verification_code(
        &self,
        email: &str,
        school_name: &str,
        code: &str,
    ) -> Result<String, String> {
        let message = verification_message(email, school_name, code, self.code_expiration_minutes);
        self.inner
            .send_email(&message)
            .await
            .map_err(|e| e.to_string())
    }
}
