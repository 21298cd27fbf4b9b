//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `REVENDO_ADMIN_EMAIL` - Admin login email
//! - `REVENDO_ADMIN_PASSWORD_HASH` - bcrypt hash of the admin password
//!   (generate with `revendo admin hash-password`)
//!
//! ## Optional
//! - `REVENDO_DATA_DIR` - Data directory (default: ./data)

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use revendo_core::{Email, PasswordHash};

const DEFAULT_DATA_DIR: &str = "./data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Directory the JSON store lives in.
    pub data_dir: PathBuf,
    /// Admin login email.
    pub admin_email: Email,
    /// bcrypt hash of the admin password.
    admin_password_hash: SecretString,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("REVENDO_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_owned())
            .into();

        let admin_email = required("REVENDO_ADMIN_EMAIL")?;
        let admin_email = Email::parse(&admin_email)
            .map_err(|e| ConfigError::InvalidEnvVar("REVENDO_ADMIN_EMAIL".into(), e.to_string()))?;

        let admin_password_hash = required("REVENDO_ADMIN_PASSWORD_HASH")?;
        if !admin_password_hash.starts_with("$2") {
            return Err(ConfigError::InvalidEnvVar(
                "REVENDO_ADMIN_PASSWORD_HASH".into(),
                "expected a bcrypt hash, not a plaintext password".into(),
            ));
        }

        Ok(Self {
            data_dir,
            admin_email,
            admin_password_hash: SecretString::from(admin_password_hash),
        })
    }

    /// Build a config directly; used by tests and the CLI.
    #[must_use]
    pub fn new(data_dir: PathBuf, admin_email: Email, admin_password_hash: &PasswordHash) -> Self {
        Self {
            data_dir,
            admin_email,
            admin_password_hash: SecretString::from(admin_password_hash.as_str().to_owned()),
        }
    }

    /// The admin credential as a verifiable hash.
    #[must_use]
    pub fn admin_password_hash(&self) -> PasswordHash {
        PasswordHash::from_hash(self.admin_password_hash.expose_secret().to_owned())
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}
