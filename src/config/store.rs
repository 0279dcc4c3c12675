//! Flat key/value configuration store.
//!
//! TOML documents are flattened into dotted keys, so `api.key = "x"` and
//! `[api]` + `key = "x"` produce the same entry. Scalars that are not strings
//! are kept in their textual form and parsed by whoever consumes them.

use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Immutable-by-convention map of dotted keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Empty store; every lookup falls through to literals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document into a flattened store.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        let mut values = BTreeMap::new();
        flatten_table("", &table, &mut values)?;
        Ok(Self { values })
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value under `key`, trimmed, or `None` when absent or blank.
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|value| !value.is_empty())
    }

    /// Insert or replace one entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_table(
    prefix: &str,
    table: &toml::Table,
    out: &mut BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten_table(&full_key, inner, out)?,
            toml::Value::String(text) => {
                out.insert(full_key, text.clone());
            }
            toml::Value::Integer(n) => {
                out.insert(full_key, n.to_string());
            }
            toml::Value::Float(f) => {
                out.insert(full_key, f.to_string());
            }
            toml::Value::Boolean(b) => {
                out.insert(full_key, b.to_string());
            }
            toml::Value::Datetime(dt) => {
                out.insert(full_key, dt.to_string());
            }
            toml::Value::Array(_) => {
                return Err(ConfigError::Invalid(format!(
                    "`{full_key}` must be a single value, not an array"
                )));
            }
        }
    }
    Ok(())
}
