//! Startup checks, banner, and request defaults for the shell.

use crate::cli::Args;
use askgpt::api::RequestParameters;
use askgpt::build_info;
use askgpt::config::{ClientConfig, ConfigDiagnostics, ShellDefaults};
use askgpt::render::RenderSink;

/// Warning shown when no credential is configured.
pub(crate) const CREDENTIAL_MISSING_WARNING: &str = "API key missing in configuration";

/// Per-session request inputs collected once from flags and config.
///
/// Model and URL stay `None` unless given on the command line so the client
/// resolves them against its configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestTemplate {
    pub model: Option<String>,
    pub url: Option<String>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl RequestTemplate {
    /// Combine CLI flags with the config-backed numeric defaults.
    pub(crate) fn from_args(args: &Args, defaults: ShellDefaults) -> Self {
        Self {
            model: args.model.clone(),
            url: args.url.as_deref().map(str::trim).map(str::to_string),
            temperature: args.temperature.unwrap_or(defaults.temperature),
            max_tokens: args.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }

    /// Build parameters for one call.
    pub(crate) fn parameters(&self, prompt: &str) -> RequestParameters {
        RequestParameters {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            url: self.url.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Surface non-fatal configuration problems.
pub(crate) fn render_config_warnings(renderer: &dyn RenderSink, diagnostics: &ConfigDiagnostics) {
    for warning in &diagnostics.warnings {
        renderer.warn(warning);
    }
}

/// Fail fast before any call when no credential is configured.
pub(crate) fn ensure_credential(config: &ClientConfig) -> Result<(), &'static str> {
    if config.has_credential() {
        Ok(())
    } else {
        Err(CREDENTIAL_MISSING_WARNING)
    }
}

/// Render the interactive banner.
pub(crate) fn render_startup_banner(
    renderer: &dyn RenderSink,
    config: &ClientConfig,
    template: &RequestTemplate,
) {
    renderer.section(&format!("askgpt {}", build_info::startup_metadata_line()));
    let model = template
        .model
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(config.default_model());
    renderer.field("model", model);
    renderer.field("temperature", &template.temperature.to_string());
    renderer.field("max tokens", &template.max_tokens.to_string());
    renderer.detail("Enter a prompt. /clear clears the screen and /quit exits.");
}
