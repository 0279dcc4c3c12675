//! `models` and `config` subcommand rendering.

use askgpt::config::{LoadedConfig, SUGGESTED_MODELS};
use askgpt::render::RenderSink;

/// List the suggested model identifiers, marking the configured default.
pub(crate) fn render_models(renderer: &dyn RenderSink, loaded: &LoadedConfig) {
    let client = loaded.client_config();
    renderer.section("suggested models");
    for model in SUGGESTED_MODELS {
        if model == client.default_model() {
            renderer.detail(&format!("{model} (default)"));
        } else {
            renderer.detail(model);
        }
    }
    if !SUGGESTED_MODELS.iter().any(|m| *m == client.default_model()) {
        renderer.detail(&format!("{} (default)", client.default_model()));
    }
}

/// Show the effective configuration. The credential is always masked.
pub(crate) fn render_config(renderer: &dyn RenderSink, loaded: &LoadedConfig) {
    let client = loaded.client_config();
    let shell = loaded.shell_defaults();
    let key = if client.has_credential() {
        client.masked_credential()
    } else {
        "(not set)".to_string()
    };

    renderer.section("configuration");
    renderer.field("source", &loaded.source.to_string());
    renderer.field("api key", &key);
    renderer.field("model", client.default_model());
    renderer.field("url", client.default_base_url());
    renderer.field("temperature", &shell.temperature.to_string());
    renderer.field("max tokens", &shell.max_tokens.to_string());
}
