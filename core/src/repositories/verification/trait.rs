//! Verification repository trait defining the interface for verification record persistence.
//!
//! The store is an external, multi-tenant service. None of these operations are
//! transactional with one another; callers that combine them (delete-then-insert)
//! accept that a concurrent request can interleave.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_record::{VerificationRecord, VerificationStatus};
use crate::errors::DomainError;

/// Repository trait for VerificationRecord persistence operations
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Insert a new record
    ///
    /// # Returns
    /// * `Ok(VerificationRecord)` - The stored record
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError>;

    /// Delete every record held by the user for the school
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows removed
    async fn delete_by_user_and_school(
        &self,
        user_id: Uuid,
        school_id: i64,
    ) -> Result<u64, DomainError>;

    /// Delete a single record by id
    ///
    /// # Returns
    /// * `Ok(true)` - Record was removed
    /// * `Ok(false)` - No such record
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Most recent record for (user, school, email) that is still pending and unverified
    async fn find_latest_pending(
        &self,
        user_id: Uuid,
        school_id: i64,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Set the status of a record, together with its verification timestamp
    async fn update_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
        verified_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError>;

    /// Increment the failed attempt counter of a record
    ///
    /// # Returns
    /// * `Ok(i32)` - The counter after the increment
    async fn increment_failed_attempts(&self, id: Uuid) -> Result<i32, DomainError>;

    /// Most recently verified record held by the user, across all schools
    async fn find_latest_verified(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Mark every pending record issued before `created_before` as expired
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows transitioned
    async fn expire_pending_before(&self, created_before: DateTime<Utc>)
        -> Result<u64, DomainError>;
}
