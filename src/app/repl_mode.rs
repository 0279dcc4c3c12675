//! Interactive REPL mode orchestration.
//!
//! Each line is one independent request. The request runs on its own tokio
//! task and the loop waits for it before reading the next line, so at most one
//! call is in flight per shell.

use crate::app::exec_mode::{render_outcome, BLANK_PROMPT_WARNING};
use crate::app::startup::RequestTemplate;
use askgpt::api::Completion;
use askgpt::render::{clear_screen, RenderSink};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReplInput {
    Prompt(String),
    Blank,
    Clear,
    Quit,
}

/// Classify one input line. Only the exact slash commands are intercepted;
/// anything else is sent as a prompt.
pub(crate) fn parse_repl_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    match trimmed {
        "" => ReplInput::Blank,
        "/clear" => ReplInput::Clear,
        "/quit" | "/exit" => ReplInput::Quit,
        _ => ReplInput::Prompt(trimmed.to_string()),
    }
}

/// Run the read/send/render loop until `/quit` or end of input.
pub(crate) async fn run_repl_mode<R>(
    renderer: &dyn RenderSink,
    client: Arc<dyn Completion>,
    template: &RequestTemplate,
    input: R,
) -> i32
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        renderer.prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                renderer.error(&format!("failed to read input: {err}"));
                return 1;
            }
        };

        match parse_repl_input(&line) {
            ReplInput::Quit => break,
            ReplInput::Blank => renderer.warn(BLANK_PROMPT_WARNING),
            ReplInput::Clear => {
                if let Err(err) = clear_screen() {
                    renderer.warn(&format!("failed to clear screen: {err}"));
                }
            }
            ReplInput::Prompt(prompt) => {
                let params = template.parameters(&prompt);
                let client = Arc::clone(&client);
                let task = tokio::spawn(async move { client.complete(&params).await });
                match task.await {
                    Ok(outcome) => {
                        render_outcome(renderer, &outcome);
                    }
                    Err(err) => renderer.error(&format!("request task failed: {err}")),
                }
            }
        }
    }
    0
}
