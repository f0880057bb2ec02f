//! Unit tests for the HTTP email service

use cb_shared::config::EmailConfig;
use reqwest::StatusCode;

use crate::email::http_email::describe_failure;
use crate::email::{verification_message, EmailService, HttpEmailService};
use crate::InfrastructureError;

fn config() -> EmailConfig {
    EmailConfig {
        provider: "http".to_string(),
        api_key: Some("re_test_key".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_requires_api_key() {
    let missing = EmailConfig {
        api_key: None,
        ..config()
    };
    let blank = EmailConfig {
        api_key: Some("  ".to_string()),
        ..config()
    };

    for cfg in [missing, blank] {
        match HttpEmailService::new(cfg) {
            Err(InfrastructureError::Config(msg)) => assert!(msg.contains("EMAIL_API_KEY")),
            _ => panic!("Expected Config error"),
        }
    }
}

#[test]
fn test_requires_api_url() {
    let cfg = EmailConfig {
        api_url: String::new(),
        ..config()
    };
    assert!(matches!(
        HttpEmailService::new(cfg),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_request_body_shape() {
    let service = HttpEmailService::new(config()).unwrap();
    let message = verification_message("student@konkuk.ac.kr", "Konkuk University", "123456", 5);

    let body = serde_json::to_value(service.body(&message)).unwrap();

    assert_eq!(body["from"], "CampusBoard <no-reply@campusboard.local>");
    assert_eq!(body["to"], serde_json::json!(["student@konkuk.ac.kr"]));
    assert_eq!(body["subject"], message.subject.as_str());
    assert!(body["text"].as_str().unwrap().contains("123456"));
    assert!(body["html"].is_string());
}

#[test]
fn test_describe_failure_truncates_body() {
    let body = "x".repeat(1000);
    let description = describe_failure(StatusCode::UNPROCESSABLE_ENTITY, &body);

    assert!(description.starts_with("Email send failed (status=422)"));
    assert!(description.len() < 300);
}

#[tokio::test]
async fn test_unreachable_provider_is_an_error() {
    let cfg = EmailConfig {
        api_url: "http://127.0.0.1:9/emails".to_string(),
        request_timeout_secs: 2,
        ..config()
    };
    let service = HttpEmailService::new(cfg).unwrap();
    let message = verification_message("student@konkuk.ac.kr", "Konkuk University", "123456", 5);

    assert!(service.send_email(&message).await.is_err());
    assert_eq!(service.provider_name(), "HTTP");
}
