//! Admin account management commands.
//!
//! The admin console never stores its own credentials in the data
//! directory; the console is configured with a bcrypt hash via
//! `REVENDO_ADMIN_PASSWORD_HASH`. This command produces that hash.

use revendo_core::{CredentialError, PasswordHash};

/// Hash a plaintext password and print the bcrypt hash on stdout.
///
/// # Errors
///
/// Returns an error for a blank password or a bcrypt failure.
#[allow(clippy::print_stdout)]
pub fn hash_password(password: &str) -> Result<(), CredentialError> {
    let hash = PasswordHash::new(password)?;
    println!("{}", hash.as_str());
    tracing::info!("Set REVENDO_ADMIN_PASSWORD_HASH to the value above");
    Ok(())
}
