//! Parameter resolution: caller input → configured default → literal.
//!
//! These are pure lookups. Nothing here fails: a missing store, a missing key
//! or an unparsable value all degrade to the supplied fallback.

use std::str::FromStr;

use super::ConfigStore;

/// Return `candidate` verbatim when it is present and non-blank, otherwise
/// `fallback`.
pub fn resolve_or(candidate: Option<&str>, fallback: &str) -> String {
    candidate
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Resolve `candidate` against the store entry under `key`, then `literal`.
///
/// A non-blank candidate is returned unchanged. Store values are trimmed and
/// skipped when blank, so the result is only empty if `literal` is.
pub fn resolve_or_default(
    candidate: Option<&str>,
    store: &ConfigStore,
    key: &str,
    literal: &str,
) -> String {
    resolve_or(candidate, store.get_non_blank(key).unwrap_or(literal))
}

/// Parse a raw store value, falling back on absence or parse failure.
pub fn parse_or<T: FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}
