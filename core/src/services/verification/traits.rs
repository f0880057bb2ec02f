//! Trait for email delivery integration

use async_trait::async_trait;

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code to a school email address
    ///
    /// Returns the provider's message id.
    async fn send_verification_code(
        &self,
        email: &str,
        school_name: &str,
        code: &str,
    ) -> Result<String, String>;
}
