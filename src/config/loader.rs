//! Top-level config loading pipeline.
//!
//! Loading never fails. An unreadable or malformed source is reported as a
//! warning and the built-in defaults take over.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::env::apply_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{ConfigDiagnostics, ConfigSource, ConfigStore, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> LoadedConfig {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> LoadedConfig
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut diagnostics = ConfigDiagnostics::default();

    let (text, source) = match read_config_text_with_sources(path_override, &read_file, &config_root)
    {
        Ok(found) => found,
        Err(err) => {
            let path = path_override.unwrap_or_default();
            diagnostics.warnings.push(format!(
                "could not read config file `{path}` ({err}); using built-in defaults"
            ));
            (String::new(), ConfigSource::BuiltInDefaults)
        }
    };
    if source == ConfigSource::BuiltInDefaults && path_override.is_none() {
        diagnostics.warnings.push(
            "no askgpt.toml found in the working directory or config directory; using built-in defaults"
                .to_string(),
        );
    }

    let mut store = match ConfigStore::from_toml_str(&text) {
        Ok(store) => store,
        Err(err) => {
            diagnostics.warnings.push(format!(
                "error loading config from {source} ({err}); using built-in defaults"
            ));
            ConfigStore::new()
        }
    };

    let applied = apply_env_overrides(&mut store, &env_lookup);
    for warning in &diagnostics.warnings {
        warn!(%warning, "configuration degraded");
    }
    debug!(
        %source,
        keys = store.len(),
        env_overrides = ?applied,
        "configuration loaded"
    );

    LoadedConfig {
        store,
        source,
        diagnostics,
    }
}
