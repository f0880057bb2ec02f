//! Repository interfaces for persistence, with in-memory implementations
//! used by tests and local development.

pub mod category;
pub mod verification;

pub use category::{CategoryRepository, MockCategoryRepository};
pub use verification::{MockVerificationRepository, VerificationRepository};
