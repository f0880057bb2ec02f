//! Domain entities representing core business objects.

pub mod category;
pub mod session;
pub mod verification_record;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use category::{BoardDescriptor, Category};
pub use session::SessionClaims;
pub use verification_record::{
    VerificationMethod, VerificationRecord, VerificationStatus, CODE_LENGTH, CODE_MAX, CODE_MIN,
    DEFAULT_EXPIRATION_MINUTES,
};
