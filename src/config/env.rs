//! Environment overrides for store keys.
//!
//! `ASKGPT_*` variables take precedence; `OPENAI_API_KEY` is accepted as a
//! fallback for the credential only. Blank values are ignored.

use super::defaults::{KEY_API_KEY, KEY_BASE_URL, KEY_DEFAULT_MODEL};
use super::ConfigStore;

/// Env variables consulted for each overridable key, in precedence order.
const ENV_OVERRIDES: [(&str, &[&str]); 3] = [
    (KEY_API_KEY, &["ASKGPT_API_KEY", "OPENAI_API_KEY"]),
    (KEY_DEFAULT_MODEL, &["ASKGPT_MODEL"]),
    (KEY_BASE_URL, &["ASKGPT_BASE_URL"]),
];

/// Apply env overrides onto `store`; returns the variables that were used.
pub(super) fn apply_env_overrides<FEnv>(
    store: &mut ConfigStore,
    env_lookup: &FEnv,
) -> Vec<&'static str>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut applied = Vec::new();
    for (key, vars) in ENV_OVERRIDES {
        let found = vars.iter().find_map(|name| {
            env_lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (*name, value))
        });
        if let Some((name, value)) = found {
            store.set(key, value);
            applied.push(name);
        }
    }
    applied
}
