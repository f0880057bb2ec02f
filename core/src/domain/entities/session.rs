//! Claims carried by the bearer tokens issued by the auth provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject - the user id
    pub sub: String,
    /// Account email, if the provider includes it
    #[serde(default)]
    pub email: Option<String>,
    /// Provider role (e.g. "authenticated")
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration time (as UTC timestamp)
    pub exp: i64,
    /// Issued at (as UTC timestamp)
    #[serde(default)]
    pub iat: Option<i64>,
}

impl SessionClaims {
    /// Parses the subject as a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
