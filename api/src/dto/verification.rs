use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use cb_core::VerificationRecord;

/// Body of `POST /school-verification`
///
/// Missing fields deserialize to empty strings so they fail validation
/// instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestVerificationRequest {
    /// School email address
    #[serde(default)]
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    /// Slug of the school board, e.g. "konkuk"
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
}

/// Body of `POST /verify-code`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmVerificationRequest {
    /// 6-digit code from the email
    #[serde(default)]
    #[validate(length(min = 1, max = 32))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestVerificationResponse {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmVerificationResponse {
    /// Always null
    pub data: Option<()>,
    pub message: String,
}

/// The school a user is currently verified for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedSchool {
    pub school_id: i64,
    pub email: String,
    pub verified_at: Option<DateTime<Utc>>,
}

impl From<VerificationRecord> for VerifiedSchool {
    fn from(record: VerificationRecord) -> Self {
        Self {
            school_id: record.school_id,
            email: record.email,
            verified_at: record.verified_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentVerificationResponse {
    pub data: Option<VerifiedSchool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let request: RequestVerificationRequest =
            serde_json::from_value(serde_json::json!({ "email": "student@konkuk.ac.kr" }))
                .unwrap();
        assert_eq!(request.slug, "");

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("slug"));
    }

    #[test]
    fn test_complete_confirm_request_validates() {
        let request = ConfirmVerificationRequest {
            code: "123456".to_string(),
            email: "student@konkuk.ac.kr".to_string(),
            slug: "konkuk".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_confirm_response_serializes_null_data() {
        let response = ConfirmVerificationResponse {
            data: None,
            message: "ok".to_string(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert!(value["data"].is_null());
        assert_eq!(value["message"], "ok");
    }
}
