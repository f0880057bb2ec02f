//! Error types for the school verification workflow and input validation
//!
//! User-facing messages are configured in the presentation layer; the
//! messages here are for logs.

use thiserror::Error;

/// School verification errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    #[error("School not found: {slug}")]
    SchoolNotFound { slug: String },

    #[error("Email domain is not registered for the school: {domain}")]
    EmailDomainNotAllowed { domain: String },

    #[error("No pending verification matches the request")]
    InvalidVerificationState,

    #[error("Incorrect verification code")]
    IncorrectCode,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Maximum verification attempts exceeded")]
    AttemptsExhausted,

    #[error("Verification email could not be delivered: {reason}")]
    EmailDeliveryFailed { reason: String },

    #[error("Verification secret is not configured")]
    MissingServerSecret,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,
}
