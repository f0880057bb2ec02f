//! Email Service Interface
//!
//! Defines the trait for email service implementations and the content of the
//! verification email.

use async_trait::async_trait;
use serde::Serialize;

use crate::InfrastructureError;

/// A plain transactional email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text: String,
    /// Optional HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Email service trait for sending messages
///
/// Implementations include:
/// - An HTTP transactional-mail API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}

/// Build the verification email for a school
///
/// The body is bilingual (English, then Korean).
pub fn verification_message(
    to: &str,
    school_name: &str,
    code: &str,
    expiration_minutes: i64,
) -> EmailMessage {
    let subject = format!("[CampusBoard] {} school email verification code", school_name);
    let text = format!(
        "Your verification code for {school} is: {code}\n\
         This code will expire in {minutes} minutes.\n\
         If you did not request this, you can ignore this email.\n\n\
         {school} 학교 이메일 인증 코드: {code}\n\
         이 코드는 {minutes}분 후에 만료됩니다.",
        school = school_name,
        code = code,
        minutes = expiration_minutes,
    );
    let html = format!(
        "<p>Your verification code for <strong>{school}</strong> is:</p>\
         <p style=\"font-size:24px;letter-spacing:4px\"><strong>{code}</strong></p>\
         <p>This code will expire in {minutes} minutes.</p>\
         <p>{school} 학교 이메일 인증 코드입니다. 이 코드는 {minutes}분 후에 만료됩니다.</p>",
        school = html_escape(school_name),
        code = code,
        minutes = expiration_minutes,
    );

    EmailMessage {
        to: to.to_string(),
        subject,
        text,
        html: Some(html),
    }
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
