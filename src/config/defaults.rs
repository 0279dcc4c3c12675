//! Default configuration constants and recognized store keys.
//!
//! Callers share these constants instead of duplicating literals.

/// Store key holding the bearer credential.
pub const KEY_API_KEY: &str = "api.key";
/// Store key holding the default model identifier.
pub const KEY_DEFAULT_MODEL: &str = "default.model";
/// Store key holding the default endpoint URL.
pub const KEY_BASE_URL: &str = "base.url";
/// Store key holding the shell's default temperature.
pub const KEY_DEFAULT_TEMP: &str = "default.temp";
/// Store key holding the shell's default output token limit.
pub const KEY_DEFAULT_TOKENS: &str = "default.tokens";

/// Model used when neither the caller nor the store names one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Endpoint used when neither the caller nor the store names one.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Temperature used when `default.temp` is absent or unparsable.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Token limit used when `default.tokens` is absent or unparsable.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Model identifiers suggested by `askgpt models`.
pub const SUGGESTED_MODELS: [&str; 3] = ["gpt-4o-mini", "gpt-4o", "gpt-3.5-turbo"];

/// Config file name searched in the working directory and the config root.
pub(super) const CONFIG_FILE_NAME: &str = "askgpt.toml";
/// Per-user directory under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "askgpt";
