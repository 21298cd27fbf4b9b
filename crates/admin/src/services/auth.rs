//! Unified login for the admin console and reseller portal.
//!
//! A single entry point checks the configured admin credential first,
//! then scans active resellers by normalized email with bcrypt
//! verification. Every failure is reported identically so callers cannot
//! distinguish an unknown user from a wrong password.

use thiserror::Error;

use revendo_core::ResellerId;
use revendo_store::Domain;

use crate::AdminConfig;

/// Login failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The one user-visible failure: wrong credentials or inactive
    /// account, deliberately indistinguishable.
    #[error("incorrect credentials or inactive account")]
    InvalidCredentials,
}

/// Who a successful login resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The configured administrator.
    Admin,
    /// An active reseller account.
    Reseller(ResellerId),
}

/// Credential verification against config and the reseller list.
pub struct AuthService<'a> {
    config: &'a AdminConfig,
}

impl<'a> AuthService<'a> {
    /// Create an auth service over the admin configuration.
    #[must_use]
    pub const fn new(config: &'a AdminConfig) -> Self {
        Self { config }
    }

    /// Verify credentials and resolve the role.
    ///
    /// Email matching ignores case and surrounding whitespace; password
    /// verification is bcrypt hash-and-compare. Inactive resellers
    /// cannot log in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any failure.
    pub fn login(
        &self,
        domain: &Domain,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        if self.config.admin_email.matches(email)
            && self.config.admin_password_hash().verify(password)
        {
            return Ok(LoginOutcome::Admin);
        }

        let found = domain
            .resellers
            .iter()
            .find(|r| r.active && r.email.matches(email))
            .filter(|r| r.password_hash.verify(password));

        match found {
            Some(reseller) => Ok(LoginOutcome::Reseller(reseller.id.clone())),
            None => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use revendo_core::{Email, PasswordHash, Reseller};

    fn config() -> AdminConfig {
        AdminConfig::new(
            PathBuf::from("/tmp/unused"),
            Email::parse("admin@store.com").expect("email"),
            &PasswordHash::new("admin123").expect("hash"),
        )
    }

    fn domain_with_reseller(active: bool) -> Domain {
        let mut domain = Domain::default();
        domain.resellers.push(Reseller {
            id: ResellerId::new("R-1"),
            name: "Juana".to_owned(),
            email: Email::parse("juana@tienda.com").expect("email"),
            password_hash: PasswordHash::new("secreta123").expect("hash"),
            region: "Norte".to_owned(),
            active,
            stock: Vec::new(),
            clients: Vec::new(),
            orders: Vec::new(),
            messages: Vec::new(),
            sales: Vec::new(),
            points: 0,
        });
        domain
    }

    #[test]
    fn test_admin_login_normalizes_email() {
        let config = config();
        let service = AuthService::new(&config);
        let outcome = service
            .login(&Domain::default(), "  Admin@Store.COM ", " admin123 ")
            .expect("login");
        assert_eq!(outcome, LoginOutcome::Admin);
    }

    #[test]
    fn test_reseller_login() {
        let config = config();
        let service = AuthService::new(&config);
        let outcome = service
            .login(&domain_with_reseller(true), "JUANA@tienda.com", "secreta123")
            .expect("login");
        assert_eq!(outcome, LoginOutcome::Reseller(ResellerId::new("R-1")));
    }

    #[test]
    fn test_inactive_reseller_rejected() {
        let config = config();
        let service = AuthService::new(&config);
        let err = service
            .login(&domain_with_reseller(false), "juana@tienda.com", "secreta123")
            .expect_err("must fail");
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_wrong_password_and_unknown_user_look_identical() {
        let config = config();
        let service = AuthService::new(&config);
        let domain = domain_with_reseller(true);

        let wrong_password = service
            .login(&domain, "juana@tienda.com", "incorrecta")
            .expect_err("must fail");
        let unknown_user = service
            .login(&domain, "nadie@tienda.com", "secreta123")
            .expect_err("must fail");
        assert_eq!(wrong_password, unknown_user);
    }
}
