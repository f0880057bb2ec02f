pub mod board;
pub mod verification;

pub use board::BoardAccessResponse;
pub use verification::{
    ConfirmVerificationRequest, ConfirmVerificationResponse, CurrentVerificationResponse,
    RequestVerificationRequest, RequestVerificationResponse, VerifiedSchool,
};

use cb_core::errors::{DomainError, ValidationError};
use validator::ValidationErrors;

/// Convert validator errors into the domain's field error.
///
/// Only the first field (alphabetically) is reported.
pub fn validation_error(errors: &ValidationErrors) -> DomainError {
    let field = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .min()
        .unwrap_or_else(|| "body".to_string());

    ValidationError::RequiredField { field }.into()
}
