use serde::{Deserialize, Serialize};

use cb_core::AccessDecision;

/// Result of `GET /boards/{slug}/access`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAccessResponse {
    pub allowed: bool,
    /// `unauthenticated`, `not_verified`, `different_school`, or null when allowed
    pub reason: Option<String>,
}

impl From<AccessDecision> for BoardAccessResponse {
    fn from(decision: AccessDecision) -> Self {
        Self {
            allowed: decision.is_allowed(),
            reason: decision.denial_reason().map(|r| r.as_str().to_string()),
        }
    }
}
