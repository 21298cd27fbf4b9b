//! Password credential storage.
//!
//! Reseller and admin passwords are stored as bcrypt hashes and verified
//! by hash-and-compare; plaintext never touches the persisted layout.

use serde::{Deserialize, Serialize};

/// Errors that can occur when hashing or verifying a credential.
#[derive(thiserror::Error, Debug)]
pub enum CredentialError {
    /// The candidate password is empty after trimming.
    #[error("password cannot be empty")]
    Empty,
    /// The underlying bcrypt operation failed.
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// A bcrypt password hash.
///
/// Verification trims the candidate first: the original login form accepted
/// passwords with accidental surrounding whitespace, and stored data may
/// have been entered the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password at the default bcrypt cost.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Empty`] for a blank password, or
    /// [`CredentialError::Bcrypt`] if hashing fails.
    pub fn new(plaintext: &str) -> Result<Self, CredentialError> {
        let plaintext = plaintext.trim();
        if plaintext.is_empty() {
            return Err(CredentialError::Empty);
        }
        let hash = bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)?;
        Ok(Self(hash))
    }

    /// Wrap an existing bcrypt hash string (e.g. loaded from config).
    #[must_use]
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Verify a candidate password against this hash.
    ///
    /// A malformed stored hash verifies as `false` rather than erroring;
    /// login failures are always reported generically.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        bcrypt::verify(candidate.trim(), &self.0).unwrap_or(false)
    }

    /// The stored hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
