//! Secret key/value bundles with redacted output and zeroization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A single secret value: string, number, boolean, nested map or sequence.
pub type SecretValue = Value;

/// The credential material held by one provider.
///
/// This wrapper ensures that:
/// - Debug output lists keys only, values show `[REDACTED]`
/// - Every string reachable from the store is wiped when it is dropped.
///   Values cloned out of the store are plain [`Value`]s and are not.
///
/// Serializes as a plain map, so it can be read directly from TOML or JSON.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretStore(Map<String, SecretValue>);

impl SecretStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&SecretValue> {
        self.0.get(key)
    }

    /// Whether the store holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over the entries.
    ///
    /// # Security
    /// The values are the raw secrets. Never log them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, SecretValue> {
        &self.0
    }

    /// Take the underlying map out of the store.
    ///
    /// The returned map is no longer wiped on drop.
    pub fn into_inner(mut self) -> Map<String, SecretValue> {
        std::mem::take(&mut self.0)
    }
}

fn zeroize_value(value: &mut Value) {
    match value {
        Value::String(s) => s.zeroize(),
        Value::Array(items) => items.iter_mut().for_each(zeroize_value),
        Value::Object(map) => map.values_mut().for_each(zeroize_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {},
    }
}

impl Zeroize for SecretStore {
    fn zeroize(&mut self) {
        self.0.values_mut().for_each(zeroize_value);
        self.0.clear();
    }
}

impl Drop for SecretStore {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretStore {}

struct Redacted;

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, Redacted)))
            .finish()
    }
}

impl From<Map<String, SecretValue>> for SecretStore {
    fn from(map: Map<String, SecretValue>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, SecretValue)> for SecretStore {
    fn from_iter<I: IntoIterator<Item = (K, SecretValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jsmith() -> SecretStore {
        SecretStore::from_iter([
            ("username", json!("jsmith")),
            ("password", json!("bcrypt:10:$2a$10$iqq53VjdCwknBSBrnyLd9OH1Mfh6")),
        ])
    }

    #[test]
    fn test_store_redacted_debug() {
        let debug_output = format!("{:?}", jsmith());
        assert_eq!(
            debug_output,
            r#"{"username": [REDACTED], "password": [REDACTED]}"#
        );
        assert!(!debug_output.contains("jsmith\""));
        assert!(!debug_output.contains("bcrypt"));
    }

    #[test]
    fn test_store_lookup() {
        let store = jsmith();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert!(store.contains_key("username"));
        assert_eq!(store.get("username"), Some(&json!("jsmith")));
        assert_eq!(store.get("email"), None);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["username", "password"]);
    }

    #[test]
    fn test_zeroize_wipes_nested_strings() {
        let mut value = json!({"inner": ["x", {"deep": "y"}], "port": 5432, "on": true});
        zeroize_value(&mut value);
        assert_eq!(
            value,
            json!({"inner": ["", {"deep": ""}], "port": 5432, "on": true})
        );
    }

    #[test]
    fn test_zeroize_clears_store() {
        let mut store = SecretStore::from_iter([
            ("token", json!("abc")),
            ("nested", json!({"inner": ["x", {"deep": "y"}]})),
        ]);
        store.zeroize();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_deserializes_from_toml_table() {
        let store: SecretStore = toml::from_str(
            r#"
            username = "jsmith"
            uid = 1000
            admin = true
            "#,
        )
        .unwrap();
        assert_eq!(store.get("username"), Some(&json!("jsmith")));
        assert_eq!(store.get("uid"), Some(&json!(1000)));
        assert_eq!(store.get("admin"), Some(&json!(true)));
    }

    #[test]
    fn test_store_serializes_as_plain_map() {
        let value = serde_json::to_value(jsmith()).unwrap();
        assert_eq!(value["username"], json!("jsmith"));
    }

    #[test]
    fn test_into_inner_keeps_entries() {
        let map = jsmith().into_inner();
        assert_eq!(map.len(), 2);
        assert_eq!(map["username"], json!("jsmith"));
    }
}
