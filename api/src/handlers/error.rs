use actix_web::{http::StatusCode, HttpResponse};
use cb_core::errors::{DomainError, ValidationError, VerificationError};
use cb_shared::{error_codes, ErrorResponse};

use crate::i18n::{format_message, get_error_message, Language};

/// Build the JSON error body for a message key
pub fn error_response(key: &str, params: &[(&str, String)], lang: Language) -> HttpResponse {
    let (code, template, status) = get_error_message(key, lang).unwrap_or_else(|| {
        (
            error_codes::INTERNAL_ERROR.to_string(),
            "An internal error occurred".to_string(),
            500,
        )
    });

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse::new(code, format_message(&template, params)))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    handle_domain_error_with_lang(error, Language::English)
}

/// Handle domain errors with language support
pub fn handle_domain_error_with_lang(error: &DomainError, lang: Language) -> HttpResponse {
    let (key, params) = message_key(error);
    let response = error_response(key, &params, lang);

    if response.status().is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    response
}

fn message_key(error: &DomainError) -> (&'static str, Vec<(&'static str, String)>) {
    match error {
        DomainError::Verification(verification_error) => match verification_error {
            VerificationError::SchoolNotFound { .. } => ("school_not_found", vec![]),
            VerificationError::EmailDomainNotAllowed { .. } => ("email_domain_not_allowed", vec![]),
            VerificationError::InvalidVerificationState => ("invalid_verification_state", vec![]),
            VerificationError::IncorrectCode => ("verification_code_invalid", vec![]),
            VerificationError::CodeExpired => ("verification_code_expired", vec![]),
            VerificationError::AttemptsExhausted => ("verification_attempts_exhausted", vec![]),
            VerificationError::EmailDeliveryFailed { .. } => ("email_delivery_failed", vec![]),
            VerificationError::MissingServerSecret => ("configuration_error", vec![]),
        },
        DomainError::ValidationErr(validation_error) => match validation_error {
            ValidationError::RequiredField { field } => {
                ("required_field", vec![("field", field.clone())])
            }
            ValidationError::InvalidFormat { field } => {
                ("invalid_format", vec![("field", field.clone())])
            }
            ValidationError::InvalidEmail => ("invalid_email", vec![]),
        },
        DomainError::Validation { .. } => ("validation", vec![]),
        DomainError::NotFound { .. } => ("not_found", vec![]),
        DomainError::Unauthorized => ("unauthorized", vec![]),
        DomainError::Internal { .. } => ("internal_error", vec![]),
    }
}
