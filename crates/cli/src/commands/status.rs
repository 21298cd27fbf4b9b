//! Summarize a data directory.

use std::path::Path;

use revendo_store::{Domain, JsonStore};

/// Print collection counts and pending admin work for `data_dir`.
///
/// # Errors
///
/// Fails if the directory cannot be opened. Unreadable files fall back
/// to empty collections, matching how the console loads.
#[allow(clippy::print_stdout)]
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open(data_dir)?;
    let domain = Domain::load(&store);

    let pending_orders: usize = domain
        .resellers
        .iter()
        .flat_map(|r| &r.orders)
        .filter(|o| !o.status.is_terminal())
        .count();
    let unread_messages: usize = domain
        .resellers
        .iter()
        .map(revendo_core::Reseller::unread_from_reseller)
        .sum();
    let active_resellers = domain.resellers.iter().filter(|r| r.active).count();

    println!("Data directory: {}", data_dir.display());
    println!("  products:       {}", domain.products.len());
    println!(
        "  resellers:      {} ({active_resellers} active)",
        domain.resellers.len()
    );
    println!("  admin clients:  {}", domain.admin_clients.len());
    println!("  banners:        {}", domain.banners.len());
    println!("  social reviews: {}", domain.social_reviews.len());
    println!("  pending orders: {pending_orders}");
    println!("  unread messages: {unread_messages}");
    Ok(())
}
