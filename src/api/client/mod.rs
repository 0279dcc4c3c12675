//! Completion request client.
//!
//! One call is one independent transaction:
//! resolve defaults → build payload → POST → interpret status or classify the
//! transport failure. The client holds no mutable state, so a single instance
//! can serve any number of concurrent calls.

mod transport;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::classify::classify_api_error;
use super::outcome::{interpret_response, CompletionOutcome};
use super::{Completion, RequestParameters};
use crate::config::{resolve_or, ClientConfig};
use crate::types::ChatRequest;

/// Resolved endpoint and payload for one call, before anything is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub body: ChatRequest,
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CompletionClient {
    /// Build a client that owns `config` for its whole lifetime.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, transport::build_http_client())
    }

    /// Build a client over a caller-supplied HTTP client.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve blank model/URL against the configured defaults and build the
    /// wire payload. Temperature and token limit are passed through unchanged.
    pub fn prepare(&self, params: &RequestParameters) -> PreparedRequest {
        let model = resolve_or(params.model.as_deref(), self.config.default_model());
        let url = resolve_or(params.url.as_deref(), self.config.default_base_url());
        PreparedRequest {
            url,
            body: ChatRequest::single_turn(
                model,
                params.prompt.as_str(),
                params.temperature,
                params.max_tokens,
            ),
        }
    }

    /// Run one request/response cycle. Never fails: every failure is an
    /// outcome variant.
    pub async fn complete(&self, params: &RequestParameters) -> CompletionOutcome {
        let PreparedRequest { url, body } = self.prepare(params);
        debug!(
            model = %body.model,
            %url,
            prompt_chars = params.prompt.chars().count(),
            temperature = body.temperature,
            max_tokens = body.max_tokens,
            "sending completion request"
        );

        match transport::post_json(&self.http, &url, self.config.credential(), &body).await {
            Ok(raw) => {
                debug!(status = raw.status, "completion response received");
                let outcome = interpret_response(raw.status, raw.body.as_deref());
                if !outcome.is_reply() {
                    warn!(status = raw.status, "completion request rejected: {outcome}");
                }
                outcome
            }
            Err(err) => {
                let failure = classify_api_error(&err);
                warn!(%url, "completion transport failure: {failure}");
                CompletionOutcome::Network(failure)
            }
        }
    }

    /// Run one call and flatten the outcome into its display string.
    pub async fn complete_text(&self, params: &RequestParameters) -> String {
        self.complete(params).await.to_string()
    }
}

#[async_trait]
impl Completion for CompletionClient {
    async fn complete(&self, params: &RequestParameters) -> CompletionOutcome {
        CompletionClient::complete(self, params).await
    }
}
