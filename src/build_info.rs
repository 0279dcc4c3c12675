//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("ASKGPT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("ASKGPT_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `askgpt --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("ASKGPT_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("ASKGPT_BUILD_TIMESTAMP")
);

/// Multi-line version block used by `askgpt --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("ASKGPT_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("ASKGPT_BUILD_TIMESTAMP")
);

/// Render concise metadata shown in the interactive banner.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
