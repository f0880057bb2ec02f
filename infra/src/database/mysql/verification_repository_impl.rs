//! MySQL implementation of the VerificationRepository trait.
//!
//! Records live in `school_verifications`. Ids are stored as CHAR(36) strings
//! and statuses as their lowercase names.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use cb_core::domain::entities::verification_record::{
    VerificationMethod, VerificationRecord, VerificationStatus,
};
use cb_core::errors::DomainError;
use cb_core::repositories::VerificationRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, school_id, email, verification_method, verification_code,
           status, failed_attempts, created_at, verified_at
    FROM school_verifications
"#;

/// MySQL implementation of VerificationRepository
pub struct MySqlVerificationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    /// Create a new MySQL verification repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn internal(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }

    /// Convert database row to VerificationRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::internal("Failed to get id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| Self::internal("Failed to get user_id", e))?;
        let method: String = row
            .try_get("verification_method")
            .map_err(|e| Self::internal("Failed to get verification_method", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| Self::internal("Failed to get status", e))?;

        Ok(VerificationRecord {
            id: Uuid::parse_str(&id).map_err(|e| Self::internal("Invalid record UUID", e))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| Self::internal("Invalid user UUID", e))?,
            school_id: row
                .try_get("school_id")
                .map_err(|e| Self::internal("Failed to get school_id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::internal("Failed to get email", e))?,
            verification_method: VerificationMethod::from_str(&method)
                .map_err(|e| Self::internal("Invalid verification_method", e))?,
            verification_code: row
                .try_get("verification_code")
                .map_err(|e| Self::internal("Failed to get verification_code", e))?,
            status: VerificationStatus::from_str(&status)
                .map_err(|e| Self::internal("Invalid status", e))?,
            failed_attempts: row
                .try_get("failed_attempts")
                .map_err(|e| Self::internal("Failed to get failed_attempts", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::internal("Failed to get created_at", e))?,
            verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verified_at")
                .map_err(|e| Self::internal("Failed to get verified_at", e))?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn create(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        let query = r#"
            INSERT INTO school_verifications (
                id, user_id, school_id, email, verification_method, verification_code,
                status, failed_attempts, created_at, verified_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.user_id.to_string())
            .bind(record.school_id)
            .bind(&record.email)
            .bind(record.verification_method.as_str())
            .bind(&record.verification_code)
            .bind(record.status.as_str())
            .bind(record.failed_attempts)
            .bind(record.created_at)
            .bind(record.verified_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::internal("Failed to save verification record", e))?;

        Ok(record)
    }

    async fn delete_by_user_and_school(
        &self,
        user_id: Uuid,
        school_id: i64,
    ) -> Result<u64, DomainError> {
        let result =
            sqlx::query("DELETE FROM school_verifications WHERE user_id = ? AND school_id = ?")
                .bind(user_id.to_string())
                .bind(school_id)
                .execute(&self.pool)
                .await
                .map_err(|e| Self::internal("Failed to delete verification records", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM school_verifications WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::internal("Failed to delete verification record", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_latest_pending(
        &self,
        user_id: Uuid,
        school_id: i64,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ? AND school_id = ? AND email = ? \
             AND status = 'pending' AND verified_at IS NULL \
             ORDER BY created_at DESC LIMIT 1",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(school_id)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::internal("Failed to find pending verification", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
        verified_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        let result =
            sqlx::query("UPDATE school_verifications SET status = ?, verified_at = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(verified_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| Self::internal("Failed to update verification status", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "VerificationRecord".to_string(),
            });
        }
        Ok(())
    }

    async fn increment_failed_attempts(&self, id: Uuid) -> Result<i32, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::internal("Failed to begin transaction", e))?;

        let result = sqlx::query(
            "UPDATE school_verifications SET failed_attempts = failed_attempts + 1 WHERE id = ?",
        )
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::internal("Failed to record failed attempt", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "VerificationRecord".to_string(),
            });
        }

        let row = sqlx::query("SELECT failed_attempts FROM school_verifications WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| Self::internal("Failed to read failed attempts", e))?;
        let attempts: i32 = row
            .try_get("failed_attempts")
            .map_err(|e| Self::internal("Failed to get failed_attempts", e))?;

        tx.commit()
            .await
            .map_err(|e| Self::internal("Failed to commit transaction", e))?;

        Ok(attempts)
    }

    async fn find_latest_verified(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ? AND status = 'verified' \
             ORDER BY verified_at DESC, created_at DESC LIMIT 1",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::internal("Failed to find verified record", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn expire_pending_before(
        &self,
        created_before: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE school_verifications SET status = 'expired' \
             WHERE status = 'pending' AND verified_at IS NULL AND created_at < ?",
        )
        .bind(created_before)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::internal("Failed to expire pending verifications", e))?;

        Ok(result.rows_affected())
    }
}
