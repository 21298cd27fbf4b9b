//! Singleton site configuration records.
//!
//! Each of these is stored whole under its own key; every field is
//! independently editable from the admin console.

use serde::{Deserialize, Serialize};

use crate::types::Brand;

/// Public contact details shown in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub instagram: String,
    pub whatsapp: String,
}

/// Bank-transfer payment details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferConfig {
    pub enabled: bool,
    /// Transfer alias (short bank identifier).
    pub alias: String,
    /// Full account number.
    pub cbu: String,
    pub account_holder: String,
}

/// Per-method payment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentConfig {
    pub transfer: TransferConfig,
    pub card_enabled: bool,
    pub cash_enabled: bool,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            transfer: TransferConfig::default(),
            card_enabled: false,
            cash_enabled: true,
        }
    }
}

/// Site-wide content: per-brand logos and hero copy.
///
/// Logo fields hold image references, typically data URIs produced by the
/// admin upload flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub logo_informa: String,
    pub logo_phisis: String,
    pub logo_iqual: String,
    pub logo_biofarma: String,
    pub hero_title: String,
    pub hero_subtitle: String,
}

impl SiteContent {
    /// The logo reference for a brand, if one has been uploaded.
    #[must_use]
    pub fn logo(&self, brand: Brand) -> Option<&str> {
        let logo = match brand {
            Brand::Informa => &self.logo_informa,
            Brand::Phisis => &self.logo_phisis,
            Brand::Iqual => &self.logo_iqual,
            Brand::Biofarma => &self.logo_biofarma,
        };
        if logo.is_empty() { None } else { Some(logo) }
    }

    /// Replace the logo for one brand.
    pub fn set_logo(&mut self, brand: Brand, reference: String) {
        match brand {
            Brand::Informa => self.logo_informa = reference,
            Brand::Phisis => self.logo_phisis = reference,
            Brand::Iqual => self.logo_iqual = reference,
            Brand::Biofarma => self.logo_biofarma = reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_config_defaults() {
        let config = PaymentConfig::default();
        assert!(config.cash_enabled);
        assert!(!config.card_enabled);
        assert!(!config.transfer.enabled);
    }

    #[test]
    fn test_empty_blob_falls_back_to_defaults() {
        let config: PaymentConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, PaymentConfig::default());
        let contact: ContactInfo = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(contact, ContactInfo::default());
    }

    #[test]
    fn test_logo_lookup() {
        let mut content = SiteContent::default();
        assert!(content.logo(Brand::Informa).is_none());
        content.set_logo(Brand::Informa, "data:image/png;base64,AAAA".to_owned());
        assert_eq!(
            content.logo(Brand::Informa),
            Some("data:image/png;base64,AAAA")
        );
    }
}
