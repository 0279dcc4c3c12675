//! Application entry orchestration for the askgpt CLI.

use crate::app::commands::{render_config, render_models};
use crate::app::exec_mode::run_exec_mode;
use crate::app::repl_mode::run_repl_mode;
use crate::app::startup::{
    ensure_credential, render_config_warnings, render_startup_banner, RequestTemplate,
};
use crate::cli::{Args, Command};
use askgpt::api::{Completion, CompletionClient};
use askgpt::config::load_config;
use askgpt::render::{RenderSink, Renderer};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, BufReader};

/// Load config once, then dispatch to a subcommand, one-shot, or REPL mode.
/// Returns the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    let loaded = load_config(args.config.as_deref());
    let renderer = Renderer::new(!args.no_color && std::io::stderr().is_terminal());
    render_config_warnings(&renderer, &loaded.diagnostics);

    match args.command {
        Some(Command::Models) => {
            render_models(&renderer, &loaded);
            return 0;
        }
        Some(Command::Config) => {
            render_config(&renderer, &loaded);
            return 0;
        }
        None => {}
    }

    let client_config = loaded.client_config();
    if let Err(warning) = ensure_credential(&client_config) {
        renderer.warn(warning);
        return 1;
    }
    let template = RequestTemplate::from_args(&args, loaded.shell_defaults());

    if let Some(prompt) = args.prompt.as_deref() {
        let client = CompletionClient::new(client_config);
        return run_exec_mode(&renderer, &client, &template, prompt).await;
    }

    if !std::io::stdin().is_terminal() {
        let prompt = match read_piped_prompt().await {
            Ok(prompt) => prompt,
            Err(err) => {
                renderer.error(&format!("failed to read prompt from stdin: {err}"));
                return 1;
            }
        };
        let client = CompletionClient::new(client_config);
        return run_exec_mode(&renderer, &client, &template, &prompt).await;
    }

    render_startup_banner(&renderer, &client_config, &template);
    let client: Arc<dyn Completion> = Arc::new(CompletionClient::new(client_config));
    let input = BufReader::new(tokio::io::stdin());
    let code = run_repl_mode(&renderer, client, &template, input).await;
    eprintln!();
    code
}

async fn read_piped_prompt() -> std::io::Result<String> {
    let mut prompt = String::new();
    tokio::io::stdin().read_to_string(&mut prompt).await?;
    Ok(prompt)
}
