//! Directory-backed JSON key-value store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::StoreError;
use crate::schema;

/// A key-value store holding one JSON file per key under a data directory.
///
/// The public `load`/`save` pair is deliberately infallible: a read
/// failure falls back to the caller's default and a write failure leaves
/// the in-memory state as the session's source of truth, both logged as
/// warnings. Callers that need to observe failures (the CLI `migrate`
/// command, tests) use `try_load`/`try_save`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store over `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The data directory this store reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a value has ever been stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.path(key).exists()
    }

    /// Load the value stored under `key`, if any, migrating its schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O failure, malformed JSON, or a schema
    /// newer than this build.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value: Value = serde_json::from_str(&raw)?;
        let data = schema::upgrade(key, value)?;
        Ok(Some(serde_json::from_value(data)?))
    }

    /// Load the value stored under `key`, falling back to `default`.
    ///
    /// Read failures are logged and swallowed; this never raises.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to load stored value, using default");
                default
            }
        }
    }

    /// Persist `value` under `key` wrapped in the current schema envelope.
    ///
    /// The value is written to a temp file and renamed into place, so a
    /// failed write leaves the previous snapshot intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on serialization or I/O failure.
    pub fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_value(value)?;
        let envelope = schema::wrap(data);
        let serialized = serde_json::to_string_pretty(&envelope)?;

        let path = self.path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Persist `value` under `key`, best-effort.
    ///
    /// Write failures are logged and swallowed; the in-memory state
    /// remains the source of truth for the session.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            tracing::warn!(key, error = %e, "failed to persist value");
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use revendo_core::Product;

    fn store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("open");
        (dir, store)
    }

    #[test]
    fn test_missing_key_loads_default() {
        let (_dir, store) = store();
        let products: Vec<Product> = store.load(keys::PRODUCTS, Vec::new());
        assert!(products.is_empty());
        assert!(!store.contains(keys::PRODUCTS));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = store();
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"id":"P-1","name":"Creatina","price":500,"stock":10}]"#,
        )
        .expect("fixture");
        store.save(keys::PRODUCTS, &products);
        let loaded: Vec<Product> = store.load(keys::PRODUCTS, Vec::new());
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_default() {
        let (dir, store) = store();
        fs::write(dir.path().join("products.json"), "{not json").expect("write");
        let products: Vec<Product> = store.load(keys::PRODUCTS, Vec::new());
        assert!(products.is_empty());
    }

    #[test]
    fn test_legacy_bare_blob_is_readable() {
        let (dir, store) = store();
        fs::write(
            dir.path().join("products.json"),
            r#"[{"id":"P-1","name":"Creatina","price":500}]"#,
        )
        .expect("write");
        let products: Vec<Product> = store.load(keys::PRODUCTS, Vec::new());
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_saved_file_carries_envelope() {
        let (dir, store) = store();
        store.save(keys::BANNERS, &Vec::<revendo_core::Banner>::new());
        let raw = fs::read_to_string(dir.path().join("banners.json")).expect("read");
        let value: Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(
            value.get("schema").and_then(Value::as_u64),
            Some(u64::from(schema::SCHEMA_VERSION))
        );
    }
}
