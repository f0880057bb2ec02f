//! Types for verification service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of a successful verification request
///
/// Carries neither the code nor its hash.
#[derive(Debug, Clone)]
pub struct RequestVerificationResult {
    /// Id of the pending record that was created
    pub record_id: Uuid,
    /// School the code was issued for
    pub school_id: i64,
    /// Display name of the school, as used in the email
    pub school_name: String,
    /// Instant after which the code is rejected
    pub expires_at: DateTime<Utc>,
}
