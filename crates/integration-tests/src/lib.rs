//! Integration tests for Revendo.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p revendo-integration-tests
//! ```
//!
//! Each test runs against its own temporary data directory; nothing is
//! shared between tests and nothing touches a real deployment.
//!
//! # Test Categories
//!
//! - `sale_flow` - Catalog to reseller to recorded sale, end to end
//! - `order_lifecycle` - Restock orders through the status workflow
//! - `messaging` - Admin-reseller threads and broadcasts
//! - `persistence` - On-disk format, legacy data, schema migration

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use revendo_admin::{AdminConfig, ProductDraft, ResellerDraft};
use revendo_core::{Email, PasswordHash};
use revendo_store::{Domain, JsonStore};

/// Admin password used by every test context.
pub const ADMIN_PASSWORD: &str = "admin-secret";
/// Admin email used by every test context.
pub const ADMIN_EMAIL: &str = "admin@revendo.test";

/// A fresh domain over a private temporary data directory.
///
/// The directory lives as long as the context does.
pub struct TestContext {
    pub store: JsonStore,
    pub domain: Domain,
    dir: tempfile::TempDir,
}

impl TestContext {
    /// Create an empty context.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp data dir");
        let store = JsonStore::open(dir.path()).expect("open store");
        let domain = Domain::load(&store);
        Self { store, domain, dir }
    }

    /// Re-read the whole domain from disk, as a fresh process would.
    #[must_use]
    pub fn reload(&self) -> Domain {
        Domain::load(&self.store)
    }

    /// Admin configuration pointing at this context's data directory.
    ///
    /// # Panics
    ///
    /// Panics if hashing the fixture password fails.
    #[must_use]
    pub fn admin_config(&self) -> AdminConfig {
        let email = Email::parse(ADMIN_EMAIL).expect("admin email");
        let hash = PasswordHash::new(ADMIN_PASSWORD).expect("hash");
        AdminConfig::new(self.dir.path().to_path_buf(), email, &hash)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Draft for a simple in-stock product.
#[must_use]
pub fn product_draft(name: &str, price: i64, stock: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_owned(),
        price: Some(Decimal::from(price)),
        stock,
        ..ProductDraft::new()
    }
}

/// Draft for an active reseller account.
#[must_use]
pub fn reseller_draft(name: &str, email: &str, password: &str) -> ResellerDraft {
    ResellerDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        password: Some(password.to_owned()),
        ..ResellerDraft::new()
    }
}
