//! Verification request flow

use cb_shared::utils::email::{extract_domain, is_valid_email, mask_email, normalize_email};
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::{DomainResult, ValidationError, VerificationError};
use crate::repositories::{CategoryRepository, VerificationRepository};

use super::code::generate_code;
use super::service::{require_field, SchoolVerificationService};
use super::traits::EmailServiceTrait;
use super::types::RequestVerificationResult;

impl<V, C, E> SchoolVerificationService<V, C, E>
where
    V: VerificationRepository,
    C: CategoryRepository,
    E: EmailServiceTrait,
{
    /// Issue a verification code for a school email address
    ///
    /// This method:
    /// 1. Validates the input and resolves the school
    /// 2. Checks the email domain against the school's registered domains
    /// 3. Generates and hashes a code
    /// 4. Removes previous records for (user, school), best-effort
    /// 5. Stores a new pending record
    /// 6. Emails the code, removing the record again if delivery fails
    ///
    /// # Arguments
    ///
    /// * `user_id` - The authenticated caller
    /// * `email` - School email address to verify
    /// * `slug` - Slug of the school category
    ///
    /// # Returns
    ///
    /// * `Ok(RequestVerificationResult)` - The pending record and its expiry
    /// * `Err(DomainError)` - Validation, lookup, configuration or delivery failure
    pub async fn request_verification(
        &self,
        user_id: Uuid,
        email: &str,
        slug: &str,
    ) -> DomainResult<RequestVerificationResult> {
        require_field(email, "email")?;
        require_field(slug, "slug")?;

        let email = normalize_email(email);
        let slug = slug.trim();
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        let domain = extract_domain(&email).ok_or(ValidationError::InvalidEmail)?;

        let school = self.resolve_school(slug).await?;

        let registered = self
            .category_repository
            .is_email_domain_registered(school.id, &domain)
            .await?;
        if !registered {
            tracing::info!(
                school_id = school.id,
                domain = %domain,
                event = "verification_domain_rejected",
                "Email domain is not registered for school"
            );
            return Err(VerificationError::EmailDomainNotAllowed { domain }.into());
        }

        // Hash before touching the store so a missing secret leaves existing rows alone
        let code = generate_code();
        let code_hash = self.hasher.hash(&code, &email)?;

        match self
            .verification_repository
            .delete_by_user_and_school(user_id, school.id)
            .await
        {
            Ok(removed) => {
                tracing::debug!(
                    user_id = %user_id,
                    school_id = school.id,
                    removed = removed,
                    "Removed previous verification records"
                );
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    school_id = school.id,
                    error = %e,
                    event = "verification_cleanup_failed",
                    "Failed to remove previous verification records"
                );
            }
        }

        let record = VerificationRecord::new_pending(user_id, school.id, email.clone(), code_hash);
        let record = self.verification_repository.create(record).await?;

        let message_id = match self
            .email_service
            .send_verification_code(&email, &school.name, &code)
            .await
        {
            Ok(message_id) => message_id,
            Err(reason) => {
                tracing::error!(
                    user_id = %user_id,
                    email = %mask_email(&email),
                    school_id = school.id,
                    error = %reason,
                    event = "verification_email_failed",
                    "Failed to send verification email"
                );
                if let Err(e) = self.verification_repository.delete(record.id).await {
                    tracing::error!(
                        record_id = %record.id,
                        error = %e,
                        event = "verification_rollback_failed",
                        "Failed to remove verification record after delivery failure"
                    );
                }
                return Err(VerificationError::EmailDeliveryFailed { reason }.into());
            }
        };

        tracing::info!(
            user_id = %user_id,
            email = %mask_email(&email),
            school_id = school.id,
            record_id = %record.id,
            message_id = %message_id,
            event = "verification_requested",
            "Verification code sent"
        );

        Ok(RequestVerificationResult {
            record_id: record.id,
            school_id: school.id,
            school_name: school.name,
            expires_at: record.expires_at(self.config.expiry_window()),
        })
    }
}
