//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Ask a chat model one question at a time. Works with any OpenAI-compatible API.
#[derive(Debug, Parser)]
#[command(
    name = "askgpt",
    version,
    long_version = askgpt::build_info::LONG_VERSION,
    after_help = askgpt::build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Prompt to send. If provided, runs in one-shot mode and exits.
    pub prompt: Option<String>,

    /// Path to config file (default: ./askgpt.toml or ~/.config/askgpt/askgpt.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Model identifier (default: `default.model` from config).
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Full chat completions endpoint URL (default: `base.url` from config).
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Sampling temperature (default: `default.temp` from config, else 0.7).
    #[arg(short = 't', long = "temperature", allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Maximum tokens in the reply (default: `default.tokens` from config, else 512).
    #[arg(short = 'n', long = "max-tokens")]
    pub max_tokens: Option<u32>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List suggested model identifiers.
    Models,
    /// Show the resolved configuration with the API key masked.
    Config,
}
