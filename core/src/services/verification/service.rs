//! Main verification service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::{DomainResult, ValidationError, VerificationError};
use crate::repositories::{CategoryRepository, VerificationRepository};

use super::code::CodeHasher;
use super::config::VerificationServiceConfig;
use super::traits::EmailServiceTrait;

/// Verification service for proving school membership through a school email address
///
/// The request flow lives in `request.rs`, the confirmation flow in `confirm.rs`.
pub struct SchoolVerificationService<V, C, E>
where
    V: VerificationRepository,
    C: CategoryRepository,
    E: EmailServiceTrait,
{
    /// Verification record storage
    pub(super) verification_repository: Arc<V>,
    /// School lookup and registered email domains
    pub(super) category_repository: Arc<C>,
    /// Outbound email delivery
    pub(super) email_service: Arc<E>,
    /// Code hasher bound to the server secret
    pub(super) hasher: CodeHasher,
    /// Service configuration
    pub(super) config: VerificationServiceConfig,
}

impl<V, C, E> SchoolVerificationService<V, C, E>
where
    V: VerificationRepository,
    C: CategoryRepository,
    E: EmailServiceTrait,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `verification_repository` - Storage for verification records
    /// * `category_repository` - School lookup
    /// * `email_service` - Email delivery
    /// * `hasher` - Code hasher holding the server secret
    /// * `config` - Service configuration
    pub fn new(
        verification_repository: Arc<V>,
        category_repository: Arc<C>,
        email_service: Arc<E>,
        hasher: CodeHasher,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            verification_repository,
            category_repository,
            email_service,
            hasher,
            config,
        }
    }

    /// Service configuration
    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// The user's most recently verified record, across all schools
    pub async fn current_verification(
        &self,
        user_id: Uuid,
    ) -> DomainResult<Option<VerificationRecord>> {
        self.verification_repository
            .find_latest_verified(user_id)
            .await
    }

    /// Resolve a school slug, failing with `SchoolNotFound`
    pub(super) async fn resolve_school(&self, slug: &str) -> DomainResult<Category> {
        self.category_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                VerificationError::SchoolNotFound {
                    slug: slug.to_string(),
                }
                .into()
            })
    }
}

/// Reject blank input with `RequiredField`
pub(super) fn require_field(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}
