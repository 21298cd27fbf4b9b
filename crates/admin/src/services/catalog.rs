//! Catalog product CRUD.

use rust_decimal::Decimal;

use revendo_core::{Brand, Money, Product, ProductId};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// An in-progress product edit: a new product, or an existing one cloned
/// into a draft. Optional fields fall back to the documented defaults on
/// save.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    /// Existing product ID when editing; `None` creates a new product.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub long_description: String,
    /// Required; must be positive.
    pub price: Option<Decimal>,
    pub brand: Brand,
    pub category: Option<String>,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub stock: u32,
    pub active: bool,
}

impl ProductDraft {
    /// Start a draft for a brand-new product.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Clone an existing product into a draft for editing.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            long_description: product.long_description.clone(),
            price: Some(product.price.amount()),
            brand: product.brand,
            category: Some(product.category.clone()),
            image: Some(product.image.clone()),
            features: product.features.clone(),
            stock: product.stock,
            active: product.active,
        }
    }
}

/// Product CRUD over the shared catalog.
pub struct CatalogService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> CatalogService<'a> {
    /// Create a catalog service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Validate a draft and replace-or-append it in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank name or a missing,
    /// zero, or negative price; the catalog is left unchanged.
    pub fn save_product(&mut self, draft: ProductDraft) -> Result<ProductId, AdminError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AdminError::Validation("product name is required".into()));
        }
        let price = draft
            .price
            .ok_or_else(|| AdminError::Validation("product price is required".into()))?;
        let price = Money::non_negative(price)
            .map_err(|e| AdminError::Validation(e.to_string()))?;
        if price.is_zero() {
            return Err(AdminError::Validation(
                "product price must be positive".into(),
            ));
        }

        let id = draft.id.unwrap_or_else(ProductId::generate);
        let product = Product {
            id: id.clone(),
            name: name.to_owned(),
            description: draft.description,
            long_description: draft.long_description,
            price,
            brand: draft.brand,
            category: draft
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "Todos".to_owned()),
            image: draft
                .image
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| "/images/placeholder.jpg".to_owned()),
            features: draft
                .features
                .into_iter()
                .map(|f| f.trim().to_owned())
                .filter(|f| !f.is_empty())
                .collect(),
            stock: draft.stock,
            active: draft.active,
        };

        match self.domain.products.iter_mut().find(|p| p.id == id) {
            Some(existing) => *existing = product,
            None => self.domain.products.push(product),
        }
        self.domain.persist_products(self.store);
        Ok(id)
    }

    /// Flip a product's active flag.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown product.
    pub fn toggle_active(&mut self, id: &ProductId) -> Result<bool, AdminError> {
        let product = self
            .domain
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| AdminError::NotFound(format!("product {id}")))?;
        product.active = !product.active;
        let active = product.active;
        self.domain.persist_products(self.store);
        Ok(active)
    }

    /// Remove a product from the catalog.
    ///
    /// Resellers keep their cloned copies; banner bundle entries that
    /// referenced the product dangle and render as a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown product.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<(), AdminError> {
        let before = self.domain.products.len();
        self.domain.products.retain(|p| &p.id != id);
        if self.domain.products.len() == before {
            return Err(AdminError::NotFound(format!("product {id}")));
        }
        self.domain.persist_products(self.store);
        Ok(())
    }
}
