//! Configuration loading and parameter resolution.
//!
//! Config is read from the first source found (highest precedence first):
//! 1. TOML file given via `--config`
//! 2. `./askgpt.toml` in the current directory
//! 3. `$XDG_CONFIG_HOME/askgpt/askgpt.toml` (or `~/.config/askgpt/askgpt.toml`)
//! 4. Built-in defaults
//!
//! Environment variables (`ASKGPT_API_KEY`, `ASKGPT_MODEL`, `ASKGPT_BASE_URL`)
//! are then applied on top. The result is a flat [`ConfigStore`] from which
//! [`ClientConfig`] and [`ShellDefaults`] are derived once at startup.

mod defaults;
mod env;
mod loader;
mod resolve;
mod sources;
mod store;
mod types;

pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, KEY_API_KEY,
    KEY_BASE_URL, KEY_DEFAULT_MODEL, KEY_DEFAULT_TEMP, KEY_DEFAULT_TOKENS, SUGGESTED_MODELS,
};
pub use loader::load_config;
pub use resolve::{parse_or, resolve_or, resolve_or_default};
pub use sources::{config_root_dir, default_global_config_path, ConfigSource};
pub use store::ConfigStore;
pub use types::{
    mask_secret, ClientConfig, ConfigDiagnostics, LoadedConfig, ShellDefaults,
};
