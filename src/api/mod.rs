//! HTTP client for OpenAI-compatible chat completion endpoints.
//!
//! The API layer is split into cohesive modules:
//! - `client`: request preparation and dispatch
//! - `outcome`: status interpretation and the tagged call result
//! - `classify`: transport failure classification

use async_trait::async_trait;

mod classify;
mod client;
mod outcome;

pub use client::{CompletionClient, PreparedRequest};
pub use outcome::{CompletionOutcome, NetworkFailure, SUCCESS_STATUS};

/// Caller-supplied inputs for one completion call.
///
/// `model` and `url` fall back to the configured defaults when absent or
/// blank. `temperature` and `max_tokens` are sent as given.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParameters {
    pub model: Option<String>,
    pub prompt: String,
    pub url: Option<String>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl RequestParameters {
    pub fn new(prompt: impl Into<String>, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            url: None,
            temperature,
            max_tokens,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Minimal completion interface used by the shell.
///
/// This trait lets tests provide deterministic outcomes without network
/// calls while the production path uses [`CompletionClient`].
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, params: &RequestParameters) -> CompletionOutcome;
}
