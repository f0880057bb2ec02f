//! In-memory implementation of VerificationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_record::{VerificationRecord, VerificationStatus};
use crate::errors::DomainError;

use super::r#trait::VerificationRepository;

/// Mock verification repository for testing and local development
#[derive(Clone, Default)]
pub struct MockVerificationRepository {
    records: Arc<RwLock<HashMap<Uuid, VerificationRecord>>>,
    fail_bulk_delete: Arc<AtomicBool>,
}

impl MockVerificationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `delete_by_user_and_school` fail, to exercise best-effort cleanup
    pub fn set_fail_bulk_delete(&self, fail: bool) {
        self.fail_bulk_delete.store(fail, Ordering::SeqCst);
    }

    /// Insert a record as-is, bypassing the service
    pub async fn insert(&self, record: VerificationRecord) {
        self.records.write().await.insert(record.id, record);
    }

    /// Fetch a record by id
    pub async fn get(&self, id: Uuid) -> Option<VerificationRecord> {
        self.records.read().await.get(&id).cloned()
    }

    /// All records held by a user, oldest first
    pub async fn records_for_user(&self, user_id: Uuid) -> Vec<VerificationRecord> {
        let mut records: Vec<_> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.created_at);
        records
    }

    /// Move the issuance time of a record, to simulate the passage of time
    pub async fn set_created_at(&self, id: Uuid, created_at: DateTime<Utc>) {
        if let Some(record) = self.records.write().await.get_mut(&id) {
            record.created_at = created_at;
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn create(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(DomainError::Validation {
                message: "Verification record already exists".to_string(),
            });
        }
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete_by_user_and_school(
        &self,
        user_id: Uuid,
        school_id: i64,
    ) -> Result<u64, DomainError> {
        if self.fail_bulk_delete.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Simulated delete failure".to_string(),
            });
        }
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| !(r.user_id == user_id && r.school_id == school_id));
        Ok((before - records.len()) as u64)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn find_latest_pending(
        &self,
        user_id: Uuid,
        school_id: i64,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| {
                r.user_id == user_id
                    && r.school_id == school_id
                    && r.email == email
                    && r.is_pending()
            })
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
        verified_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "VerificationRecord".to_string(),
        })?;
        record.status = status;
        record.verified_at = verified_at;
        Ok(())
    }

    async fn increment_failed_attempts(&self, id: Uuid) -> Result<i32, DomainError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "VerificationRecord".to_string(),
        })?;
        record.failed_attempts += 1;
        Ok(record.failed_attempts)
    }

    async fn find_latest_verified(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id && r.status == VerificationStatus::Verified)
            .max_by_key(|r| r.verified_at)
            .cloned())
    }

    async fn expire_pending_before(
        &self,
        created_before: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let mut expired = 0;
        for record in records.values_mut() {
            if record.is_pending() && record.created_at < created_before {
                record.mark_expired();
                expired += 1;
            }
        }
        Ok(expired)
    }
}
