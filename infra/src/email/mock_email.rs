//! Mock Email Service Implementation
//!
//! Logs emails instead of sending them. Used in development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use cb_shared::config::Environment;
use cb_shared::utils::email::{is_valid_email, mask_email};

use super::email_service::{EmailMessage, EmailService};
use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// This implementation:
/// - Prints emails to the console when console output is on
/// - Validates recipient addresses
/// - Generates mock message IDs
/// - Keeps the sent messages for inspection
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Messages sent so far
    outbox: Arc<Mutex<Vec<EmailMessage>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock email service without console output
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            outbox: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
            console_output,
        }
    }

    /// Mock for a deployment environment; message bodies are printed only in development
    pub fn for_environment(environment: Environment) -> Self {
        Self::with_options(environment.is_development(), false)
    }

    /// Whether message bodies are printed to stdout
    pub fn prints_to_console(&self) -> bool {
        self.console_output
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages sent so far, oldest first
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(&message.to);

        if !is_valid_email(&message.to) {
            return Err(InfrastructureError::Email(format!(
                "Invalid email address: {}",
                masked
            )));
        }

        if self.simulate_failure {
            warn!("Mock email service simulating failure for: {}", masked);
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", message.to);
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            println!("{}", message.text);
            println!("{}\n", "=".repeat(60));
        }

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(message.clone());
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %masked,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
