//! Versioned storage schema and on-load migrations.
//!
//! Every file the store writes is an envelope `{"schema": N, "data": ...}`.
//! Blobs written before the envelope existed are bare values; they are
//! treated as schema 0 and migrated forward key by key. Migrations are
//! pure JSON transforms so they run before the typed models ever see the
//! data.

use serde_json::{Value, json};

use revendo_core::PasswordHash;

use crate::StoreError;
use crate::keys;

/// Current schema version written by the store.
pub const SCHEMA_VERSION: u32 = 1;

/// Wrap a serialized value in the current envelope.
#[must_use]
pub fn wrap(data: Value) -> Value {
    json!({ "schema": SCHEMA_VERSION, "data": data })
}

/// Unwrap a raw blob into `(version, data)`.
///
/// A JSON object carrying a numeric `schema` and a `data` member is an
/// envelope; anything else is a legacy schema-0 bare value.
fn unwrap(raw: Value) -> (u32, Value) {
    if let Value::Object(ref obj) = raw
        && let Some(version) = obj.get("schema").and_then(Value::as_u64)
        && obj.contains_key("data")
    {
        let data = obj.get("data").cloned().unwrap_or(Value::Null);
        return (u32::try_from(version).unwrap_or(u32::MAX), data);
    }
    (0, raw)
}

/// Unwrap a raw blob and migrate it to [`SCHEMA_VERSION`].
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the blob claims a schema newer than
/// this build understands.
pub fn upgrade(key: &str, raw: Value) -> Result<Value, StoreError> {
    let (version, mut data) = unwrap(raw);

    if version > SCHEMA_VERSION {
        return Err(StoreError::Corrupt {
            key: key.to_owned(),
            reason: format!("schema {version} is newer than supported {SCHEMA_VERSION}"),
        });
    }

    if version < 1 {
        data = migrate_v0_to_v1(key, data);
    }

    Ok(data)
}

/// Schema 0 → 1: hash legacy plaintext reseller passwords.
///
/// Old blobs stored `password` in the clear; v1 stores a bcrypt
/// `passwordHash`. A reseller whose plaintext cannot be hashed (empty
/// password) is left without a credential and can no longer log in.
fn migrate_v0_to_v1(key: &str, mut data: Value) -> Value {
    if key != keys::RESELLERS {
        return data;
    }

    if let Value::Array(ref mut resellers) = data {
        for reseller in resellers.iter_mut() {
            let Value::Object(fields) = reseller else {
                continue;
            };
            if fields.contains_key("passwordHash") {
                continue;
            }
            let Some(plaintext) = fields.remove("password") else {
                continue;
            };
            match plaintext.as_str().map(PasswordHash::new) {
                Some(Ok(hash)) => {
                    fields.insert("passwordHash".to_owned(), json!(hash.as_str()));
                }
                _ => {
                    let id = fields.get("id").and_then(Value::as_str).unwrap_or("?");
                    tracing::warn!(id, "dropping unusable legacy password during migration");
                }
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_then_upgrade_is_identity() {
        let data = json!([{"id": "P-1", "name": "Creatina", "price": 500}]);
        let upgraded = upgrade(keys::PRODUCTS, wrap(data.clone())).expect("upgrade");
        assert_eq!(upgraded, data);
    }

    #[test]
    fn test_bare_value_is_schema_zero() {
        let data = json!([{"id": "B-1", "title": "Promo"}]);
        let upgraded = upgrade(keys::BANNERS, data.clone()).expect("upgrade");
        assert_eq!(upgraded, data);
    }

    #[test]
    fn test_future_schema_is_rejected() {
        let raw = json!({ "schema": 99, "data": [] });
        assert!(matches!(
            upgrade(keys::PRODUCTS, raw),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_legacy_passwords_are_hashed() {
        let raw = json!([{
            "id": "R-1",
            "name": "Juana",
            "email": "juana@tienda.com",
            "password": "secreta"
        }]);
        let upgraded = upgrade(keys::RESELLERS, raw).expect("upgrade");
        let reseller = upgraded.get(0).expect("reseller");
        assert!(reseller.get("password").is_none());
        let hash = reseller
            .get("passwordHash")
            .and_then(Value::as_str)
            .expect("hash");
        assert!(PasswordHash::from_hash(hash).verify("secreta"));
    }

    #[test]
    fn test_unusable_legacy_password_is_dropped() {
        // Blank or non-string passwords cannot be hashed; the account is
        // left without a credential rather than failing the whole load.
        let raw = json!([
            {"id": "R-1", "name": "Juana", "email": "juana@tienda.com", "password": "   "},
            {"id": "R-2", "name": "Lucía", "email": "lucia@tienda.com", "password": 42}
        ]);
        let upgraded = upgrade(keys::RESELLERS, raw).expect("upgrade");
        for reseller in upgraded.as_array().expect("array") {
            assert!(reseller.get("password").is_none());
            assert!(reseller.get("passwordHash").is_none());
        }
    }

    #[test]
    fn test_already_hashed_reseller_untouched() {
        let raw = json!([{
            "id": "R-1",
            "name": "Juana",
            "email": "juana@tienda.com",
            "passwordHash": "$2b$12$abcdefghijklmnopqrstuv"
        }]);
        let upgraded = upgrade(keys::RESELLERS, raw.clone()).expect("upgrade");
        assert_eq!(upgraded, raw);
    }
}
