//! HTTP Email Service Implementation
//!
//! Sends mail through a JSON transactional-mail API. The request is made
//! once; a failed delivery is reported to the caller, which removes the
//! pending record it created.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use cb_shared::config::EmailConfig;
use cb_shared::utils::email::mask_email;

use super::email_service::{EmailMessage, EmailService};
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
pub(crate) struct SendEmailBody<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Email service backed by an HTTP mail API
pub struct HttpEmailService {
    client: Client,
    config: EmailConfig,
    api_key: String,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    ///
    /// # Errors
    /// `InfrastructureError::Config` when the API key or URL is missing.
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| InfrastructureError::Config("EMAIL_API_KEY is required".to_string()))?
            .to_string();

        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("CampusBoard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Request body for a message
    pub(crate) fn body<'a>(&self, message: &'a EmailMessage) -> SendEmailBody<'a> {
        SendEmailBody {
            from: self.config.sender(),
            to: vec![message.to.as_str()],
            subject: &message.subject,
            text: &message.text,
            html: message.html.as_deref(),
        }
    }
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(&message.to);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.body(message))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    target: "email_service",
                    provider = "http",
                    to = %masked,
                    error = %e,
                    "Email request failed"
                );
                InfrastructureError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                target: "email_service",
                provider = "http",
                to = %masked,
                status = status.as_u16(),
                "Email provider rejected the message"
            );
            return Err(InfrastructureError::Email(describe_failure(status, &body)));
        }

        let message_id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|parsed| parsed.id)
            .unwrap_or_else(|| format!("http_{}", uuid::Uuid::new_v4()));

        tracing::info!(
            target: "email_service",
            provider = "http",
            to = %masked,
            message_id = %message_id,
            "Email sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}

/// Human-readable failure, truncated so provider payloads do not flood logs
pub(crate) fn describe_failure(status: StatusCode, body: &str) -> String {
    let snippet: String = body.chars().take(200).collect();
    format!("Email send failed (status={}): {}", status.as_u16(), snippet)
}
