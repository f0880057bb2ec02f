//! Unit tests for email service selection

use cb_shared::config::{EmailConfig, Environment};

use crate::email::{create_email_service, MockEmailService};
use crate::InfrastructureError;

fn http_config(api_key: Option<&str>) -> EmailConfig {
    EmailConfig {
        provider: "http".to_string(),
        api_key: api_key.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_create_mock_service_outside_production() {
    for environment in [Environment::Development, Environment::Staging] {
        let service = create_email_service(&EmailConfig::default(), environment).unwrap();
        assert_eq!(service.provider_name(), "Mock");
    }
}

#[test]
fn test_mock_service_rejected_in_production() {
    match create_email_service(&EmailConfig::default(), Environment::Production) {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("production")),
        Err(other) => panic!("Expected Config error, got {}", other),
        Ok(service) => panic!("Expected Config error, got {}", service.provider_name()),
    }
}

#[test]
fn test_create_http_service() {
    let service =
        create_email_service(&http_config(Some("re_test_key")), Environment::Production).unwrap();
    assert_eq!(service.provider_name(), "HTTP");
}

#[test]
fn test_http_without_key_is_an_error() {
    for environment in [Environment::Development, Environment::Production] {
        match create_email_service(&http_config(None), environment) {
            Err(InfrastructureError::Config(msg)) => assert!(msg.contains("EMAIL_API_KEY")),
            Err(other) => panic!("Expected Config error, got {}", other),
            Ok(service) => panic!("Expected Config error, got {}", service.provider_name()),
        }
    }
}

#[test]
fn test_unknown_provider_is_an_error() {
    let config = EmailConfig {
        provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };

    match create_email_service(&config, Environment::Development) {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("carrier-pigeon")),
        Err(other) => panic!("Expected Config error, got {}", other),
        Ok(service) => panic!("Expected Config error, got {}", service.provider_name()),
    }
}

#[test]
fn test_mock_prints_message_bodies_only_in_development() {
    assert!(MockEmailService::for_environment(Environment::Development).prints_to_console());
    assert!(!MockEmailService::for_environment(Environment::Staging).prints_to_console());
    assert!(!MockEmailService::for_environment(Environment::Production).prints_to_console());
    assert!(!MockEmailService::new().prints_to_console());
}
