//! The in-memory domain state.
//!
//! Every collection is loaded up front and held whole; mutations replace
//! a collection and persist it back under its key. There is no diffing
//! and no partial update, matching how the state has always been stored.

use revendo_core::{
    Banner, Client, ContactInfo, PaymentConfig, Product, Reseller, ResellerId, SiteContent,
    SocialReview,
};

use crate::{JsonStore, keys};

/// The full domain state, one field per storage key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Domain {
    pub products: Vec<Product>,
    pub resellers: Vec<Reseller>,
    pub admin_clients: Vec<Client>,
    pub banners: Vec<Banner>,
    pub social_reviews: Vec<SocialReview>,
    pub contact_info: ContactInfo,
    pub payment_config: PaymentConfig,
    pub site_content: SiteContent,
}

impl Domain {
    /// Load every collection from the store, defaulting what is absent
    /// or unreadable.
    #[must_use]
    pub fn load(store: &JsonStore) -> Self {
        Self {
            products: store.load(keys::PRODUCTS, Vec::new()),
            resellers: store.load(keys::RESELLERS, Vec::new()),
            admin_clients: store.load(keys::ADMIN_CLIENTS, Vec::new()),
            banners: store.load(keys::BANNERS, Vec::new()),
            social_reviews: store.load(keys::SOCIAL_REVIEWS, Vec::new()),
            contact_info: store.load(keys::CONTACT_INFO, ContactInfo::default()),
            payment_config: store.load(keys::PAYMENT_CONFIG, PaymentConfig::default()),
            site_content: store.load(keys::SITE_CONTENT, SiteContent::default()),
        }
    }

    /// Persist every collection. Used by seeding and migration.
    pub fn persist_all(&self, store: &JsonStore) {
        self.persist_products(store);
        self.persist_resellers(store);
        self.persist_admin_clients(store);
        self.persist_banners(store);
        self.persist_social_reviews(store);
        self.persist_contact_info(store);
        self.persist_payment_config(store);
        self.persist_site_content(store);
    }

    pub fn persist_products(&self, store: &JsonStore) {
        store.save(keys::PRODUCTS, &self.products);
    }

    pub fn persist_resellers(&self, store: &JsonStore) {
        store.save(keys::RESELLERS, &self.resellers);
    }

    pub fn persist_admin_clients(&self, store: &JsonStore) {
        store.save(keys::ADMIN_CLIENTS, &self.admin_clients);
    }

    pub fn persist_banners(&self, store: &JsonStore) {
        store.save(keys::BANNERS, &self.banners);
    }

    pub fn persist_social_reviews(&self, store: &JsonStore) {
        store.save(keys::SOCIAL_REVIEWS, &self.social_reviews);
    }

    pub fn persist_contact_info(&self, store: &JsonStore) {
        store.save(keys::CONTACT_INFO, &self.contact_info);
    }

    pub fn persist_payment_config(&self, store: &JsonStore) {
        store.save(keys::PAYMENT_CONFIG, &self.payment_config);
    }

    pub fn persist_site_content(&self, store: &JsonStore) {
        store.save(keys::SITE_CONTENT, &self.site_content);
    }

    /// Look up a reseller by ID.
    #[must_use]
    pub fn reseller(&self, id: &ResellerId) -> Option<&Reseller> {
        self.resellers.iter().find(|r| &r.id == id)
    }

    /// Look up a reseller by ID for mutation.
    pub fn reseller_mut(&mut self, id: &ResellerId) -> Option<&mut Reseller> {
        self.resellers.iter_mut().find(|r| &r.id == id)
    }

    /// Look up a catalog product by ID.
    #[must_use]
    pub fn product(&self, id: &revendo_core::ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}
