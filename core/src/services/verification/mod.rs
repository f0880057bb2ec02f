//! School email verification module
//!
//! This module provides the complete verification workflow:
//! - Code generation and hashing against a server secret
//! - Verification requests (domain check, single pending record, email dispatch)
//! - Code confirmation with lazy expiry and an optional attempt cap
//! - A periodic sweep marking stale pending records as expired

mod code;
mod config;
mod confirm;
mod request;
mod service;
mod sweep;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use code::{generate_code, is_well_formed_code, CodeHasher};
pub use config::VerificationServiceConfig;
pub use service::SchoolVerificationService;
pub use sweep::{ExpirySweepConfig, ExpirySweepService, SweepResult};
pub use traits::EmailServiceTrait;
pub use types::RequestVerificationResult;
