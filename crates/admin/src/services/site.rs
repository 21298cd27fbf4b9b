//! Site configuration singletons.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use revendo_core::{Brand, ContactInfo, PaymentConfig, SiteContent};
use revendo_store::{Domain, JsonStore};

/// Singleton configuration updates: contact details, payment settings,
/// and site content (logos, hero copy).
pub struct SiteConfigService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> SiteConfigService<'a> {
    /// Create a site configuration service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Replace the contact details.
    pub fn set_contact_info(&mut self, info: ContactInfo) {
        self.domain.contact_info = info;
        self.domain.persist_contact_info(self.store);
    }

    /// Replace the payment configuration.
    pub fn set_payment_config(&mut self, config: PaymentConfig) {
        self.domain.payment_config = config;
        self.domain.persist_payment_config(self.store);
    }

    /// Replace the site content.
    pub fn set_site_content(&mut self, content: SiteContent) {
        self.domain.site_content = content;
        self.domain.persist_site_content(self.store);
    }

    /// Store an uploaded logo for one brand as a data URI.
    pub fn upload_logo(&mut self, brand: Brand, bytes: &[u8], mime: &str) {
        let reference = encode_image(bytes, mime);
        self.domain.site_content.set_logo(brand, reference);
        self.domain.persist_site_content(self.store);
    }
}

/// Encode raw image bytes as a `data:` URI for inline storage.
///
/// No size or type validation is performed; the caller decides what to
/// accept.
#[must_use]
pub fn encode_image(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}
