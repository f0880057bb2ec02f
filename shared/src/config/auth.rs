//! Authentication configuration
//!
//! Sessions are issued by the hosted auth provider; this server only verifies
//! the bearer tokens it receives.

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HS256 secret used to verify access tokens
    pub secret: String,

    /// Expected `aud` claim, if the provider sets one
    pub audience: Option<String>,

    /// Clock skew tolerance in seconds
    pub leeway_seconds: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            audience: None,
            leeway_seconds: 30,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the expected audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Override fields from the well-known environment variables
    pub fn apply_env(&mut self) {
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.jwt.secret = secret;
        }
        if let Ok(audience) = std::env::var("JWT_AUDIENCE") {
            self.jwt.audience = Some(audience).filter(|a| !a.trim().is_empty());
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}
