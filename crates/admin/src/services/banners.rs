//! Banner and bundle management.

use revendo_core::{Banner, BannerId, Brand, BundleEntry, BundleEntryId, ProductId};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// Label rendered for a bundle entry whose product no longer exists.
pub const UNKNOWN_PRODUCT_LABEL: &str = "Producto Desconocido";

/// An in-progress banner edit.
#[derive(Debug, Clone, Default)]
pub struct BannerDraft {
    /// Existing banner ID when editing; `None` creates a new banner.
    pub id: Option<BannerId>,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub brand: Brand,
    pub active: bool,
    pub discount_percentage: u32,
}

impl BannerDraft {
    /// Start a draft for a new banner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Clone an existing banner into a draft for editing.
    #[must_use]
    pub fn edit(banner: &Banner) -> Self {
        Self {
            id: Some(banner.id.clone()),
            title: banner.title.clone(),
            description: banner.description.clone(),
            image: Some(banner.image.clone()),
            brand: banner.brand,
            active: banner.active,
            discount_percentage: banner.discount_percentage,
        }
    }
}

/// A bundle entry resolved against the current catalog for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBundleEntry {
    pub entry_id: BundleEntryId,
    /// Product name, or [`UNKNOWN_PRODUCT_LABEL`] if the reference dangles.
    pub product_name: String,
    pub quantity: u32,
    pub discount_percentage: Option<u32>,
}

/// Banner CRUD plus bundle sub-CRUD.
pub struct BannerService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> BannerService<'a> {
    /// Create a banner service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Validate a draft and replace-or-append it.
    ///
    /// Editing keeps the banner's existing bundle; bundle entries are
    /// managed through [`Self::add_bundle_entry`] and
    /// [`Self::remove_bundle_entry`].
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank title.
    pub fn save_banner(&mut self, draft: BannerDraft) -> Result<BannerId, AdminError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(AdminError::Validation("banner title is required".into()));
        }

        let id = draft.id.unwrap_or_else(BannerId::generate);
        let related_products = self
            .domain
            .banners
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.related_products.clone())
            .unwrap_or_default();

        let banner = Banner {
            id: id.clone(),
            title: title.to_owned(),
            description: draft.description,
            image: draft
                .image
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| "/images/placeholder-banner.jpg".to_owned()),
            brand: draft.brand,
            active: draft.active,
            discount_percentage: draft.discount_percentage,
            related_products,
        };

        match self.domain.banners.iter_mut().find(|b| b.id == id) {
            Some(existing) => *existing = banner,
            None => self.domain.banners.push(banner),
        }
        self.domain.persist_banners(self.store);
        Ok(id)
    }

    /// Remove a banner.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown banner.
    pub fn delete_banner(&mut self, id: &BannerId) -> Result<(), AdminError> {
        let before = self.domain.banners.len();
        self.domain.banners.retain(|b| &b.id != id);
        if self.domain.banners.len() == before {
            return Err(AdminError::NotFound(format!("banner {id}")));
        }
        self.domain.persist_banners(self.store);
        Ok(())
    }

    /// Append a product entry to a banner's bundle.
    ///
    /// The product reference is weak: the product must exist *now*, but
    /// the entry survives later product deletion and then resolves to a
    /// placeholder.
    ///
    /// # Errors
    ///
    /// - [`AdminError::NotFound`] for an unknown banner or product.
    /// - [`AdminError::Validation`] for a zero quantity.
    pub fn add_bundle_entry(
        &mut self,
        banner_id: &BannerId,
        product_id: ProductId,
        quantity: u32,
        discount_percentage: Option<u32>,
    ) -> Result<BundleEntryId, AdminError> {
        if quantity == 0 {
            return Err(AdminError::Validation(
                "bundle quantity must be at least 1".into(),
            ));
        }
        if self.domain.product(&product_id).is_none() {
            return Err(AdminError::NotFound(format!("product {product_id}")));
        }
        let banner = self
            .domain
            .banners
            .iter_mut()
            .find(|b| &b.id == banner_id)
            .ok_or_else(|| AdminError::NotFound(format!("banner {banner_id}")))?;

        let entry_id = BundleEntryId::generate();
        banner.related_products.push(BundleEntry {
            id: entry_id.clone(),
            product_id,
            quantity,
            discount_percentage,
        });
        self.domain.persist_banners(self.store);
        Ok(entry_id)
    }

    /// Remove a bundle entry by its stable ID.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown banner or entry.
    pub fn remove_bundle_entry(
        &mut self,
        banner_id: &BannerId,
        entry_id: &BundleEntryId,
    ) -> Result<(), AdminError> {
        let banner = self
            .domain
            .banners
            .iter_mut()
            .find(|b| &b.id == banner_id)
            .ok_or_else(|| AdminError::NotFound(format!("banner {banner_id}")))?;

        let before = banner.related_products.len();
        banner.related_products.retain(|e| &e.id != entry_id);
        if banner.related_products.len() == before {
            return Err(AdminError::NotFound(format!("bundle entry {entry_id}")));
        }
        self.domain.persist_banners(self.store);
        Ok(())
    }

    /// Resolve a banner's bundle against the current catalog for display.
    ///
    /// Dangling references resolve to [`UNKNOWN_PRODUCT_LABEL`] rather
    /// than failing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown banner.
    pub fn resolve_bundle(
        &self,
        banner_id: &BannerId,
    ) -> Result<Vec<ResolvedBundleEntry>, AdminError> {
        let banner = self
            .domain
            .banners
            .iter()
            .find(|b| &b.id == banner_id)
            .ok_or_else(|| AdminError::NotFound(format!("banner {banner_id}")))?;

        Ok(banner
            .related_products
            .iter()
            .map(|entry| ResolvedBundleEntry {
                entry_id: entry.id.clone(),
                product_name: self
                    .domain
                    .product(&entry.product_id)
                    .map_or_else(|| UNKNOWN_PRODUCT_LABEL.to_owned(), |p| p.name.clone()),
                quantity: entry.quantity,
                discount_percentage: entry.discount_percentage,
            })
            .collect())
    }
}
