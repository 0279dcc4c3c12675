//! Configuration data model.
//!
//! `ClientConfig` is what the completion client owns; `ShellDefaults` is what
//! the presentation shell pre-fills its numeric inputs with. Both are derived
//! from a [`ConfigStore`] once and never mutated afterwards.

use std::fmt;

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, KEY_API_KEY,
    KEY_BASE_URL, KEY_DEFAULT_MODEL, KEY_DEFAULT_TEMP, KEY_DEFAULT_TOKENS,
};
use super::resolve::{parse_or, resolve_or, resolve_or_default};
use super::{ConfigSource, ConfigStore};

/// Credential and request defaults owned by a completion client.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    credential: String,
    default_model: String,
    default_base_url: String,
}

impl ClientConfig {
    /// Build a config from explicit values. Blank defaults fall back to the
    /// built-in literals so the resolved model/URL are never empty.
    pub fn new(
        credential: impl Into<String>,
        default_model: impl AsRef<str>,
        default_base_url: impl AsRef<str>,
    ) -> Self {
        Self {
            credential: credential.into().trim().to_string(),
            default_model: resolve_or(Some(default_model.as_ref()), DEFAULT_MODEL),
            default_base_url: resolve_or(Some(default_base_url.as_ref()), DEFAULT_BASE_URL),
        }
    }

    /// Derive the client config from a key/value store.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self {
            credential: store.get_non_blank(KEY_API_KEY).unwrap_or_default().to_string(),
            default_model: resolve_or_default(None, store, KEY_DEFAULT_MODEL, DEFAULT_MODEL),
            default_base_url: resolve_or_default(None, store, KEY_BASE_URL, DEFAULT_BASE_URL),
        }
    }

    /// Bearer credential. Never log or display this value unmasked.
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// True when a non-blank credential is configured.
    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn default_base_url(&self) -> &str {
        &self.default_base_url
    }

    /// Credential with every character replaced by a bullet.
    pub fn masked_credential(&self) -> String {
        mask_secret(&self.credential)
    }
}

impl Default for ClientConfig {
    /// No credential; built-in model and endpoint.
    fn default() -> Self {
        Self::from_store(&ConfigStore::new())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credential", &self.masked_credential())
            .field("default_model", &self.default_model)
            .field("default_base_url", &self.default_base_url)
            .finish()
    }
}

/// Numeric defaults the shell pre-fills when the user gives none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellDefaults {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ShellDefaults {
    /// Parse `default.temp` / `default.tokens`, each with its own fallback.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self {
            temperature: parse_or(store.get(KEY_DEFAULT_TEMP), DEFAULT_TEMPERATURE),
            max_tokens: parse_or(store.get(KEY_DEFAULT_TOKENS), DEFAULT_MAX_TOKENS),
        }
    }
}

impl Default for ShellDefaults {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Non-fatal problems found while loading configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    /// Human-readable warnings for the shell to surface.
    pub warnings: Vec<String>,
}

/// Store plus where it came from and what went wrong along the way.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub store: ConfigStore,
    pub source: ConfigSource,
    pub diagnostics: ConfigDiagnostics,
}

impl LoadedConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::from_store(&self.store)
    }

    pub fn shell_defaults(&self) -> ShellDefaults {
        ShellDefaults::from_store(&self.store)
    }
}

/// Replace every character of `secret` with `•`.
pub fn mask_secret(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
