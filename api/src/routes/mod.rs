//! Route handlers
//!
//! - `verification` - School email verification (request, confirm, current status)
//! - `boards` - Board access checks
//! - `health` - Liveness and database health

pub mod boards;
pub mod health;
pub mod verification;

use std::sync::Arc;

use cb_core::{
    AccessService, CategoryRepository, EmailServiceTrait, SchoolVerificationService,
    VerificationRepository,
};

/// Application state that holds shared services
pub struct AppState<V, C, E>
where
    V: VerificationRepository,
    C: CategoryRepository,
    E: EmailServiceTrait,
{
    pub verification_service: Arc<SchoolVerificationService<V, C, E>>,
    pub access_service: Arc<AccessService<V, C>>,
}
