//! Seed a data directory with demo data.
//!
//! Produces a small but complete dataset: a catalog across the four
//! brands, one active reseller account (login `demo@revendo.test`,
//! password `demo1234`) whose private stock mirrors the catalog, and
//! default contact and payment configuration.
//!
//! Refuses to touch a non-empty data directory unless `--force` is
//! given.

use std::path::Path;

use tracing::info;

use revendo_core::{
    Brand, Client, ClientId, ContactInfo, Email, Money, PasswordHash, PaymentConfig, PaymentMethod,
    Product, ProductId, Reseller, ResellerId,
};
use revendo_store::{Domain, JsonStore, keys};

/// Demo reseller login, for use with the portal.
pub const DEMO_RESELLER_EMAIL: &str = "demo@revendo.test";
/// Demo reseller password.
pub const DEMO_RESELLER_PASSWORD: &str = "demo1234";

/// Write the demo dataset into `data_dir`.
///
/// # Errors
///
/// Fails if the directory cannot be created, if any file already holds
/// data and `force` is false, or if a write fails.
pub fn run(data_dir: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open(data_dir)?;

    if !force {
        if let Some(key) = keys::ALL.iter().find(|key| store.contains(key)) {
            return Err(format!(
                "data directory {} already contains '{key}'; pass --force to overwrite",
                data_dir.display()
            )
            .into());
        }
    }

    let mut domain = Domain::default();
    domain.products = demo_catalog();
    domain.resellers = vec![demo_reseller(&domain.products)?];
    domain.contact_info = demo_contact_info();
    domain.payment_config = PaymentConfig::default();

    // Persist through the fallible path so a broken disk surfaces here
    // instead of being logged and swallowed.
    store.try_save(keys::PRODUCTS, &domain.products)?;
    store.try_save(keys::RESELLERS, &domain.resellers)?;
    store.try_save(keys::ADMIN_CLIENTS, &domain.admin_clients)?;
    store.try_save(keys::BANNERS, &domain.banners)?;
    store.try_save(keys::SOCIAL_REVIEWS, &domain.social_reviews)?;
    store.try_save(keys::CONTACT_INFO, &domain.contact_info)?;
    store.try_save(keys::PAYMENT_CONFIG, &domain.payment_config)?;
    store.try_save(keys::SITE_CONTENT, &domain.site_content)?;

    info!(
        dir = %data_dir.display(),
        products = domain.products.len(),
        resellers = domain.resellers.len(),
        "Seed complete"
    );
    info!("Demo reseller login: {DEMO_RESELLER_EMAIL} / {DEMO_RESELLER_PASSWORD}");
    Ok(())
}

fn demo_product(id: &str, name: &str, brand: Brand, price: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: format!("{name} - presentación estándar"),
        long_description: String::new(),
        price: Money::from_units(price),
        brand,
        category: "Suplementos".to_owned(),
        image: "/images/placeholder.jpg".to_owned(),
        features: Vec::new(),
        stock,
        active: true,
    }
}

fn demo_catalog() -> Vec<Product> {
    vec![
        demo_product("prod-creatina", "Creatina Monohidrato 300g", Brand::Informa, 15000, 40),
        demo_product("prod-proteina", "Proteína Whey 1kg", Brand::Informa, 32000, 25),
        demo_product("prod-magnesio", "Magnesio Citrato 60 caps", Brand::Phisis, 8500, 60),
        demo_product("prod-omega", "Omega 3 90 caps", Brand::Phisis, 12000, 30),
        demo_product("prod-colageno", "Colágeno Hidrolizado 250g", Brand::Iqual, 9800, 50),
        demo_product("prod-vitamina-d", "Vitamina D3 2000UI", Brand::Biofarma, 6400, 80),
    ]
}

fn demo_reseller(catalog: &[Product]) -> Result<Reseller, Box<dyn std::error::Error>> {
    Ok(Reseller {
        id: ResellerId::new("res-demo"),
        name: "Revendedora Demo".to_owned(),
        email: Email::parse(DEMO_RESELLER_EMAIL)?,
        password_hash: PasswordHash::new(DEMO_RESELLER_PASSWORD)?,
        region: "Centro".to_owned(),
        active: true,
        // Private stock starts as a copy of the catalog.
        stock: catalog.to_vec(),
        clients: vec![Client {
            id: ClientId::new("cli-demo"),
            name: "Cliente Demo".to_owned(),
            phone: "+54 11 5555-0000".to_owned(),
            address: "Av. Siempre Viva 742".to_owned(),
            payment_method: PaymentMethod::Efectivo,
            current_account_balance: Money::ZERO,
            last_order_date: None,
        }],
        orders: Vec::new(),
        messages: Vec::new(),
        sales: Vec::new(),
        points: 0,
    })
}

fn demo_contact_info() -> ContactInfo {
    ContactInfo {
        phone: "+54 11 5555-1234".to_owned(),
        email: "contacto@revendo.test".to_owned(),
        address: "Buenos Aires, Argentina".to_owned(),
        instagram: "@revendo".to_owned(),
        whatsapp: "+54 11 5555-1234".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_every_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        run(dir.path(), false).expect("seed");

        let store = JsonStore::open(dir.path()).expect("open");
        for key in keys::ALL {
            assert!(store.contains(key), "missing {key}");
        }

        let domain = Domain::load(&store);
        assert!(!domain.products.is_empty());
        let reseller = domain.resellers.first().expect("reseller");
        assert_eq!(reseller.stock.len(), domain.products.len());
        assert!(reseller.password_hash.verify(DEMO_RESELLER_PASSWORD));
    }

    #[test]
    fn test_seed_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        run(dir.path(), false).expect("seed");
        assert!(run(dir.path(), false).is_err());
        run(dir.path(), true).expect("forced reseed");
    }
}
