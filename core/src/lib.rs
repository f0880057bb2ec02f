//! # CampusBoard Core
//!
//! Core business logic and domain layer for the CampusBoard backend.
//! This crate contains domain entities, the school verification workflow,
//! the board access gate, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    BoardDescriptor, Category, SessionClaims, VerificationMethod, VerificationRecord,
    VerificationStatus,
};
pub use errors::*;
pub use repositories::{
    CategoryRepository, MockCategoryRepository, MockVerificationRepository,
    VerificationRepository,
};
pub use services::{
    AccessDecision, AccessGate, AccessService, CodeHasher, DenialReason, EmailServiceTrait,
    ExpirySweepConfig, ExpirySweepService, RequestVerificationResult, SchoolVerificationService,
    VerificationServiceConfig, Viewer,
};
