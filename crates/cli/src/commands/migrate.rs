//! Rewrite stored files at the current schema version.
//!
//! Loading already migrates in memory (bare legacy blobs are treated as
//! schema 0 and upgraded on the way in); this command makes the upgrade
//! durable by rewriting every present file with the current envelope.
//! Running it twice is a no-op.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use revendo_store::{JsonStore, keys, schema};

/// Upgrade every stored file under `data_dir` to [`schema::SCHEMA_VERSION`].
///
/// # Errors
///
/// Fails on the first unreadable or unwritable file; files already
/// rewritten stay rewritten.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open(data_dir)?;

    let mut migrated = 0usize;
    for key in keys::ALL {
        // Loading unwraps the envelope and applies pending migrations;
        // saving rewraps at the current version.
        let Some(data) = store.try_load::<Value>(key)? else {
            continue;
        };
        store.try_save(key, &data)?;
        migrated += 1;
        info!(key, "Migrated");
    }

    info!(
        migrated,
        schema = schema::SCHEMA_VERSION,
        "Migration complete"
    );
    Ok(())
}
