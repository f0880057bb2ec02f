//! School verification record entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Lifecycle state of a verification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Code issued, awaiting confirmation
    Pending,
    /// Code confirmed; the user is verified for the school
    Verified,
    /// Confirmation attempted after the code lifetime
    Expired,
    /// Too many incorrect confirmations
    Rejected,
}

impl VerificationStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Expired => "expired",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "verified" => Ok(VerificationStatus::Verified),
            "expired" => Ok(VerificationStatus::Expired),
            "rejected" => Ok(VerificationStatus::Rejected),
            other => Err(format!("Unknown verification status: {}", other)),
        }
    }
}

/// Channel the code was delivered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    Email,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::Email => "email",
        }
    }
}

impl FromStr for VerificationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(VerificationMethod::Email),
            other => Err(format!("Unknown verification method: {}", other)),
        }
    }
}

/// One attempt by a user to prove membership of a school through its email domain
///
/// `verification_code` always holds the hash of the issued code, never the code itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Account that requested the verification
    pub user_id: Uuid,

    /// Category id of the school being verified
    pub school_id: i64,

    /// School email address the code was sent to (normalized)
    pub email: String,

    /// Delivery channel, always email in this workflow
    pub verification_method: VerificationMethod,

    /// Hex digest of (code, email, server secret)
    pub verification_code: String,

    /// Current lifecycle state
    pub status: VerificationStatus,

    /// Incorrect confirmations so far
    pub failed_attempts: i32,

    /// Issuance timestamp
    pub created_at: DateTime<Utc>,

    /// Set only when the status is `Verified`
    pub verified_at: Option<DateTime<Utc>>,
}

impl VerificationRecord {
    /// Creates a new pending record holding an already-hashed code
    pub fn new_pending(user_id: Uuid, school_id: i64, email: String, code_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            school_id,
            email,
            verification_method: VerificationMethod::Email,
            verification_code: code_hash,
            status: VerificationStatus::Pending,
            failed_attempts: 0,
            created_at: Utc::now(),
            verified_at: None,
        }
    }

    /// Instant after which the code can no longer be confirmed
    pub fn expires_at(&self, window: Duration) -> DateTime<Utc> {
        self.created_at + window
    }

    /// Whether `now` lies strictly after the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now > self.expires_at(window)
    }

    /// Whether the record still awaits confirmation
    pub fn is_pending(&self) -> bool {
        self.status == VerificationStatus::Pending && self.verified_at.is_none()
    }

    /// Marks the record as verified at the given instant
    pub fn mark_verified(&mut self, at: DateTime<Utc>) {
        self.status = VerificationStatus::Verified;
        self.verified_at = Some(at);
    }

    /// Marks the record as expired
    pub fn mark_expired(&mut self) {
        self.status = VerificationStatus::Expired;
        self.verified_at = None;
    }

    /// Marks the record as rejected
    pub fn mark_rejected(&mut self) {
        self.status = VerificationStatus::Rejected;
        self.verified_at = None;
    }
}
