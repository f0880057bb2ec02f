//! Business services containing domain logic and use cases.

pub mod access;
pub mod verification;

// Re-export commonly used types
pub use access::{AccessDecision, AccessGate, AccessService, DenialReason, Viewer};
pub use verification::{
    generate_code, is_well_formed_code, CodeHasher, EmailServiceTrait, ExpirySweepConfig,
    ExpirySweepService, RequestVerificationResult, SchoolVerificationService, SweepResult,
    VerificationServiceConfig,
};
