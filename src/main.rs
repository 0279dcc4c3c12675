//! CLI entry point for askgpt.

mod app;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_FILTER_ENV: &str = "ASKGPT_LOG";

#[tokio::main]
async fn main() {
    init_tracing();
    let args = cli::Args::parse();
    let code = app::entry::run(args).await;
    std::process::exit(code);
}

/// Install a stderr `fmt` subscriber; stdout is reserved for replies.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
