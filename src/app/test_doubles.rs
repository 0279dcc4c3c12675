//! Recording renderer and scripted completion used by shell tests.

use askgpt::api::{Completion, CompletionOutcome, RequestParameters};
use askgpt::render::RenderSink;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub(crate) struct MockRenderer {
    entries: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRenderer {
    fn record(&self, kind: &str, message: &str) {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .push((kind.to_string(), message.to_string()));
    }

    pub(crate) fn saw(&self, kind: &str, needle: &str) -> bool {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .iter()
            .any(|(k, msg)| k == kind && msg.contains(needle))
    }

    pub(crate) fn saw_anywhere(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .iter()
            .any(|(_, msg)| msg.contains(needle))
    }

    pub(crate) fn kinds_with_text(&self, kind: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .iter()
            .filter(|(k, _)| k == kind)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl RenderSink for MockRenderer {
    fn prompt(&self) {
        self.record("prompt", "");
    }

    fn assistant_message(&self, content: &str) {
        self.record("assistant", content);
    }

    fn section(&self, title: &str) {
        self.record("section", title);
    }

    fn field(&self, key: &str, value: &str) {
        self.record("field", &format!("{key}:{value}"));
    }

    fn detail(&self, text: &str) {
        self.record("detail", text);
    }

    fn warn(&self, msg: &str) {
        self.record("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.record("error", msg);
    }
}

/// Completion double that replays scripted outcomes and records every call.
#[derive(Default)]
pub(crate) struct ScriptedCompletion {
    outcomes: Mutex<VecDeque<CompletionOutcome>>,
    calls: Mutex<Vec<RequestParameters>>,
}

impl ScriptedCompletion {
    pub(crate) fn new(outcomes: Vec<CompletionOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RequestParameters> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl Completion for ScriptedCompletion {
    async fn complete(&self, params: &RequestParameters) -> CompletionOutcome {
        self.calls.lock().expect("calls lock").push(params.clone());
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or(CompletionOutcome::NoChoices)
    }
}
