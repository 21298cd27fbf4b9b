//! Reseller account management.

use revendo_core::{Email, PasswordHash, Reseller, ResellerId};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// An in-progress reseller edit.
///
/// On create, the reseller's private stock is a deep copy of the current
/// catalog; on update, existing sub-state (stock, clients, orders,
/// messages, sales, points) is preserved and only the profile fields
/// change.
#[derive(Debug, Clone, Default)]
pub struct ResellerDraft {
    /// Existing reseller ID when editing; `None` creates a new account.
    pub id: Option<ResellerId>,
    pub name: String,
    pub email: String,
    /// New plaintext password; on edit, `None` keeps the current one.
    pub password: Option<String>,
    pub region: Option<String>,
    pub active: bool,
}

impl ResellerDraft {
    /// Start a draft for a new reseller account.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Clone an existing reseller's profile fields into a draft.
    #[must_use]
    pub fn edit(reseller: &Reseller) -> Self {
        Self {
            id: Some(reseller.id.clone()),
            name: reseller.name.clone(),
            email: reseller.email.as_str().to_owned(),
            password: None,
            region: Some(reseller.region.clone()),
            active: reseller.active,
        }
    }
}

/// Reseller account CRUD.
pub struct ResellerService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> ResellerService<'a> {
    /// Create a reseller service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Validate a draft and create or update the account.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Validation`] for a blank name, malformed email, or
    ///   a missing password on create.
    /// - [`AdminError::Conflict`] if another account already uses the
    ///   email (case-insensitive).
    pub fn save_reseller(&mut self, draft: ResellerDraft) -> Result<ResellerId, AdminError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AdminError::Validation("reseller name is required".into()));
        }
        let email =
            Email::parse(&draft.email).map_err(|e| AdminError::Validation(e.to_string()))?;

        let taken = self
            .domain
            .resellers
            .iter()
            .any(|r| r.email == email && Some(&r.id) != draft.id.as_ref());
        if taken {
            return Err(AdminError::Conflict(format!(
                "email {email} is already registered"
            )));
        }

        let password_hash = match draft.password.as_deref() {
            Some(plaintext) => Some(
                PasswordHash::new(plaintext)
                    .map_err(|e| AdminError::Validation(e.to_string()))?,
            ),
            None => None,
        };

        let region = draft
            .region
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| "General".to_owned());

        if let Some(id) = draft.id {
            let reseller = self
                .domain
                .reseller_mut(&id)
                .ok_or_else(|| AdminError::NotFound(format!("reseller {id}")))?;
            reseller.name = name.to_owned();
            reseller.email = email;
            reseller.region = region;
            reseller.active = draft.active;
            if let Some(hash) = password_hash {
                reseller.password_hash = hash;
            }
            self.domain.persist_resellers(self.store);
            return Ok(id);
        }

        let password_hash = password_hash.ok_or_else(|| {
            AdminError::Validation("a password is required for a new reseller".into())
        })?;

        let id = ResellerId::generate();
        let reseller = Reseller {
            id: id.clone(),
            name: name.to_owned(),
            email,
            password_hash,
            region,
            active: draft.active,
            // Deep copy of the catalog; the reseller manages these counts
            // independently from here on.
            stock: self.domain.products.clone(),
            clients: Vec::new(),
            orders: Vec::new(),
            messages: Vec::new(),
            sales: Vec::new(),
            points: 0,
        };
        self.domain.resellers.push(reseller);
        self.domain.persist_resellers(self.store);
        Ok(id)
    }

    /// Remove a reseller account and all of its private sub-state.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown reseller.
    pub fn delete_reseller(&mut self, id: &ResellerId) -> Result<(), AdminError> {
        let before = self.domain.resellers.len();
        self.domain.resellers.retain(|r| &r.id != id);
        if self.domain.resellers.len() == before {
            return Err(AdminError::NotFound(format!("reseller {id}")));
        }
        self.domain.persist_resellers(self.store);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::services::catalog::{CatalogService, ProductDraft};

    fn setup() -> (tempfile::TempDir, JsonStore, Domain) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("open");
        (dir, store, Domain::default())
    }

    fn juana() -> ResellerDraft {
        ResellerDraft {
            name: "Juana".to_owned(),
            email: "juana@tienda.com".to_owned(),
            password: Some("secreta123".to_owned()),
            region: Some("Norte".to_owned()),
            ..ResellerDraft::new()
        }
    }

    #[test]
    fn test_new_reseller_clones_catalog_stock() {
        let (_dir, store, mut domain) = setup();
        CatalogService::new(&mut domain, &store)
            .save_product(ProductDraft {
                name: "Creatina".to_owned(),
                price: Some(Decimal::from(500)),
                stock: 10,
                ..ProductDraft::new()
            })
            .expect("product");

        let id = ResellerService::new(&mut domain, &store)
            .save_reseller(juana())
            .expect("reseller");

        let reseller = domain.reseller(&id).expect("lookup");
        assert_eq!(reseller.stock.len(), 1);

        // The clone is independent: catalog changes do not propagate.
        domain.products.clear();
        let reseller = domain.reseller(&id).expect("lookup");
        assert_eq!(reseller.stock.len(), 1);
    }

    #[test]
    fn test_duplicate_email_is_conflict_case_insensitive() {
        let (_dir, store, mut domain) = setup();
        ResellerService::new(&mut domain, &store)
            .save_reseller(juana())
            .expect("first");

        let mut dup = juana();
        dup.name = "Otra".to_owned();
        dup.email = "  JUANA@Tienda.com ".to_owned();
        let err = ResellerService::new(&mut domain, &store)
            .save_reseller(dup)
            .expect_err("must conflict");
        assert!(matches!(err, AdminError::Conflict(_)));
        assert_eq!(domain.resellers.len(), 1);
    }

    #[test]
    fn test_new_reseller_requires_password() {
        let (_dir, store, mut domain) = setup();
        let mut draft = juana();
        draft.password = None;
        let err = ResellerService::new(&mut domain, &store)
            .save_reseller(draft)
            .expect_err("must fail");
        assert!(matches!(err, AdminError::Validation(_)));
    }

    #[test]
    fn test_edit_preserves_substate_and_password() {
        let (_dir, store, mut domain) = setup();
        let id = ResellerService::new(&mut domain, &store)
            .save_reseller(juana())
            .expect("create");
        domain
            .reseller_mut(&id)
            .expect("lookup")
            .points = 7;

        let mut edit = ResellerDraft::edit(domain.reseller(&id).expect("lookup"));
        edit.region = Some("Sur".to_owned());
        ResellerService::new(&mut domain, &store)
            .save_reseller(edit)
            .expect("update");

        let reseller = domain.reseller(&id).expect("lookup");
        assert_eq!(reseller.region, "Sur");
        assert_eq!(reseller.points, 7);
        assert!(reseller.password_hash.verify("secreta123"));
    }

    #[test]
    fn test_delete_reseller() {
        let (_dir, store, mut domain) = setup();
        let id = ResellerService::new(&mut domain, &store)
            .save_reseller(juana())
            .expect("create");
        ResellerService::new(&mut domain, &store)
            .delete_reseller(&id)
            .expect("delete");
        assert!(domain.resellers.is_empty());
    }
}
