//! Unit tests for the core trait adapter

use cb_core::services::verification::EmailServiceTrait;

use crate::email::{EmailServiceAdapter, MockEmailService};

#[tokio::test]
async fn test_adapter_sends_verification_email() {
    let mock = MockEmailService::with_options(false, false);
    let adapter = EmailServiceAdapter::new(Box::new(mock.clone()), 10);

    let message_id = adapter
        .send_verification_code("student@konkuk.ac.kr", "Konkuk University", "123456")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(adapter.provider_name(), "Mock");

    let sent = mock.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "student@konkuk.ac.kr");
    assert!(sent[0].text.contains("123456"));
    assert!(sent[0].text.contains("10 minutes"));
}

#[tokio::test]
async fn test_adapter_maps_failures_to_strings() {
    let mock = MockEmailService::with_options(false, true);
    let adapter = EmailServiceAdapter::new(Box::new(mock), 5);

    let error = adapter
        .send_verification_code("student@konkuk.ac.kr", "Konkuk University", "123456")
        .await
        .unwrap_err();

    assert!(error.contains("Simulated email sending failure"));
}
