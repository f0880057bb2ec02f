//! Verification code generation and hashing

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use sha2::{Digest, Sha256};

use crate::domain::entities::verification_record::{CODE_LENGTH, CODE_MAX, CODE_MIN};
use crate::errors::{DomainResult, VerificationError};

/// Generate a six digit code drawn uniformly from [100000, 999999]
///
/// Uses the operating system CSPRNG.
pub fn generate_code() -> String {
    let code: u32 = OsRng.gen_range(CODE_MIN..=CODE_MAX);
    format!("{:06}", code)
}

/// Whether the input is exactly six ASCII digits
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

/// Derives the stored representation of a code
///
/// The digest is SHA-256 over `code:email:secret`, hex encoded. Callers pass
/// the email already normalized.
#[derive(Clone)]
pub struct CodeHasher {
    secret: Option<String>,
}

impl CodeHasher {
    /// Create a hasher. A blank secret is treated as absent.
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self { secret }
    }

    /// Whether a usable secret is configured
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Hash a code for the given email
    ///
    /// # Errors
    /// `VerificationError::MissingServerSecret` when no secret is configured.
    pub fn hash(&self, code: &str, email: &str) -> DomainResult<String> {
        let secret = self
            .secret
            .as_deref()
            .ok_or(VerificationError::MissingServerSecret)?;

        let mut hasher = Sha256::new();
        hasher.update(code.as_bytes());
        hasher.update(b":");
        hasher.update(email.as_bytes());
        hasher.update(b":");
        hasher.update(secret.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    /// Re-hash `code` and compare it against a stored digest in constant time
    pub fn matches(&self, code: &str, email: &str, stored_hash: &str) -> DomainResult<bool> {
        let candidate = self.hash(code, email)?;
        if candidate.len() != stored_hash.len() {
            return Ok(false);
        }
        Ok(constant_time_eq(candidate.as_bytes(), stored_hash.as_bytes()))
    }
}

impl std::fmt::Debug for CodeHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeHasher")
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .finish()
    }
}
