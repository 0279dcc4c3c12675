//! One-shot exec mode orchestration.
//!
//! Used for `askgpt "<prompt>"` and for prompts piped on stdin.

use crate::app::startup::RequestTemplate;
use askgpt::api::{Completion, CompletionOutcome};
use askgpt::render::RenderSink;

/// Warning shown instead of sending an empty prompt.
pub(crate) const BLANK_PROMPT_WARNING: &str = "Please enter a prompt.";

/// Send a single prompt and render its outcome. Returns the exit code.
pub(crate) async fn run_exec_mode(
    renderer: &dyn RenderSink,
    client: &dyn Completion,
    template: &RequestTemplate,
    prompt: &str,
) -> i32 {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        renderer.warn(BLANK_PROMPT_WARNING);
        return 1;
    }
    let outcome = client.complete(&template.parameters(prompt)).await;
    render_outcome(renderer, &outcome)
}

/// Replies (placeholders included) go to stdout; everything else is an error
/// line on stderr. Returns the exit code for the outcome.
pub(crate) fn render_outcome(renderer: &dyn RenderSink, outcome: &CompletionOutcome) -> i32 {
    if outcome.is_reply() {
        renderer.assistant_message(&outcome.to_string());
        0
    } else {
        renderer.error(&outcome.to_string());
        1
    }
}
