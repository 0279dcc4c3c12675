//! Tagged result of one completion call and its HTTP-status interpretation.
//!
//! Every code path of a call ends in a [`CompletionOutcome`]. The variants
//! keep their structure for programmatic callers; `Display` flattens them into
//! the fixed strings the shell shows to the user.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::types::{ChatResponse, ErrorEnvelope};

/// The only status treated as success; every other code takes the error path.
pub const SUCCESS_STATUS: u16 = 200;

/// Terminal outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Assistant reply, trimmed of surrounding whitespace.
    Reply(String),
    /// Status 200 but `choices` was missing or empty.
    NoChoices,
    /// Status 200 but the first choice carried no `message.content`.
    EmptyMessage,
    /// Non-200 status, with `error.message` when the body had one.
    Api { status: u16, message: Option<String> },
    /// The exchange failed before a status was available.
    Network(NetworkFailure),
    /// Status 200 but the body was not a JSON object.
    InvalidResponse(String),
}

impl CompletionOutcome {
    /// True for the success channel: a reply or one of its placeholders.
    pub fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_) | Self::NoChoices | Self::EmptyMessage)
    }

    /// Reply text when the model produced one.
    pub fn reply_text(&self) -> Option<&str> {
        match self {
            Self::Reply(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CompletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reply(text) => f.write_str(text),
            Self::NoChoices => f.write_str("(No response from API)"),
            Self::EmptyMessage => f.write_str("(Empty message)"),
            Self::Api {
                message: Some(message),
                ..
            } => f.write_str(message),
            Self::Api {
                status,
                message: None,
            } => write!(f, "API error ({status})"),
            Self::Network(failure) => write!(f, "{failure}"),
            Self::InvalidResponse(detail) => write!(f, "Invalid response from API ({detail})"),
        }
    }
}

/// Classified transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkFailure {
    /// Host name could not be resolved.
    HostUnreachable,
    /// Connection timed out or was refused; carries the raw diagnostic text.
    ServerUnreachable(String),
    /// Any other transport failure; carries the raw diagnostic text.
    Other(String),
}

impl fmt::Display for NetworkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostUnreachable => f.write_str("No internet connection."),
            Self::ServerUnreachable(detail) => write!(
                f,
                "Network error. Unable to reach the API server ({detail})"
            ),
            Self::Other(detail) => f.write_str(detail),
        }
    }
}

/// Interpret a received response by status code.
///
/// `body` is `None` when the body of a non-200 response could not be read.
pub(crate) fn interpret_response(status: u16, body: Option<&str>) -> CompletionOutcome {
    if status == SUCCESS_STATUS {
        interpret_success(body.unwrap_or_default())
    } else {
        interpret_failure(status, body)
    }
}

fn interpret_success(body: &str) -> CompletionOutcome {
    let parsed: ChatResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(err) => return CompletionOutcome::InvalidResponse(err.to_string()),
    };
    if let Some(usage) = &parsed.usage {
        debug!(
            prompt_tokens = ?usage.prompt_tokens,
            completion_tokens = ?usage.completion_tokens,
            total_tokens = ?usage.total_tokens,
            "completion usage"
        );
    }

    let Some(first) = parsed.choices.as_deref().and_then(<[_]>::first) else {
        return CompletionOutcome::NoChoices;
    };
    match first.message.as_ref().and_then(|m| m.content.as_ref()) {
        None | Some(Value::Null) => CompletionOutcome::EmptyMessage,
        Some(Value::String(text)) => CompletionOutcome::Reply(text.trim().to_string()),
        Some(other) => CompletionOutcome::Reply(other.to_string().trim().to_string()),
    }
}

fn interpret_failure(status: u16, body: Option<&str>) -> CompletionOutcome {
    // Parse failures here only mean "no message"; they never escape.
    let message = body
        .and_then(|text| serde_json::from_str::<ErrorEnvelope>(text).ok())
        .and_then(|envelope| envelope.error)
        .and_then(|detail| detail.message);
    CompletionOutcome::Api { status, message }
}
