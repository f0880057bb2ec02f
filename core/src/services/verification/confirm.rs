//! Verification confirmation flow

use cb_shared::utils::email::{mask_email, normalize_email};
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::verification_record::{VerificationRecord, VerificationStatus};
use crate::errors::{DomainResult, ValidationError, VerificationError};
use crate::repositories::{CategoryRepository, VerificationRepository};

use super::code::is_well_formed_code;
use super::service::{require_field, SchoolVerificationService};
use super::traits::EmailServiceTrait;

impl<V, C, E> SchoolVerificationService<V, C, E>
where
    V: VerificationRepository,
    C: CategoryRepository,
    E: EmailServiceTrait,
{
    /// Confirm a code previously sent by `request_verification`
    ///
    /// Only the newest pending record for (user, school, email) is considered.
    /// An expired record is marked `expired` before the error is returned. An
    /// incorrect code leaves the record untouched unless an attempt cap is set.
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationRecord)` - The record, now verified
    /// * `Err(DomainError)` - Invalid input, unknown school, no pending record,
    ///   expired or incorrect code
    pub async fn confirm_verification(
        &self,
        user_id: Uuid,
        code: &str,
        email: &str,
        slug: &str,
    ) -> DomainResult<VerificationRecord> {
        require_field(code, "code")?;
        require_field(email, "email")?;
        require_field(slug, "slug")?;

        let code = code.trim();
        if !is_well_formed_code(code) {
            return Err(ValidationError::InvalidFormat {
                field: "code".to_string(),
            }
            .into());
        }
        let email = normalize_email(email);

        let school = self.resolve_school(slug.trim()).await?;

        let mut record = self
            .verification_repository
            .find_latest_pending(user_id, school.id, &email)
            .await?
            .ok_or(VerificationError::InvalidVerificationState)?;

        let now = Utc::now();
        if record.is_expired_at(now, self.config.expiry_window()) {
            if let Err(e) = self
                .verification_repository
                .update_status(record.id, VerificationStatus::Expired, None)
                .await
            {
                tracing::error!(
                    record_id = %record.id,
                    error = %e,
                    event = "verification_expire_failed",
                    "Failed to mark verification record as expired"
                );
            }
            tracing::info!(
                user_id = %user_id,
                record_id = %record.id,
                event = "verification_code_expired",
                "Verification code expired"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if !self
            .hasher
            .matches(code, &email, &record.verification_code)?
        {
            return Err(self.reject_attempt(&record, user_id).await?.into());
        }

        self.verification_repository
            .update_status(record.id, VerificationStatus::Verified, Some(now))
            .await?;
        record.mark_verified(now);

        tracing::info!(
            user_id = %user_id,
            email = %mask_email(&email),
            school_id = school.id,
            record_id = %record.id,
            event = "verification_confirmed",
            "School email verified"
        );

        Ok(record)
    }

    /// Account for an incorrect code and pick the error to surface
    async fn reject_attempt(
        &self,
        record: &VerificationRecord,
        user_id: Uuid,
    ) -> DomainResult<VerificationError> {
        let Some(max_attempts) = self.config.max_failed_attempts else {
            tracing::info!(
                user_id = %user_id,
                record_id = %record.id,
                event = "verification_code_mismatch",
                "Incorrect verification code"
            );
            return Ok(VerificationError::IncorrectCode);
        };

        let attempts = self
            .verification_repository
            .increment_failed_attempts(record.id)
            .await?;

        tracing::info!(
            user_id = %user_id,
            record_id = %record.id,
            attempts = attempts,
            max_attempts = max_attempts,
            event = "verification_code_mismatch",
            "Incorrect verification code"
        );

        if attempts < max_attempts {
            return Ok(VerificationError::IncorrectCode);
        }

        self.verification_repository
            .update_status(record.id, VerificationStatus::Rejected, None)
            .await?;
        tracing::warn!(
            user_id = %user_id,
            record_id = %record.id,
            event = "verification_attempts_exhausted",
            "Verification record rejected after too many incorrect codes"
        );
        Ok(VerificationError::AttemptsExhausted)
    }
}
