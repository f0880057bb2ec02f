//! Unit tests for mock email service

use crate::email::{verification_message, EmailService, MockEmailService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_email_send_success() {
    let service = MockEmailService::with_options(false, false);
    let message = verification_message("student@konkuk.ac.kr", "Konkuk University", "123456", 5);

    let message_id = service.send_email(&message).await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.sent_messages(), vec![message]);
}

#[tokio::test]
async fn test_mock_email_invalid_address() {
    let service = MockEmailService::with_options(false, false);
    let message = verification_message("not-an-address", "Konkuk University", "123456", 5);

    match service.send_email(&message).await {
        Err(InfrastructureError::Email(msg)) => assert!(msg.contains("Invalid email address")),
        other => panic!("Expected Email error, got {:?}", other),
    }
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_email_simulate_failure() {
    let mut service = MockEmailService::with_options(false, false);
    service.set_simulate_failure(true);
    let message = verification_message("student@konkuk.ac.kr", "Konkuk University", "123456", 5);

    assert!(service.send_email(&message).await.is_err());
    assert!(service.sent_messages().is_empty());
}
