//! Transport failure classification.
//!
//! The classification works on the rendered error chain so it behaves the
//! same for every error type the transport can produce.

use std::error::Error;

use super::outcome::NetworkFailure;
use crate::error::ApiError;

/// Lower-cased fragments that identify a host-resolution failure.
const HOST_RESOLUTION_MARKERS: [&str; 5] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host is known",
    "nodename nor servname provided",
];

/// Classify a transport error into a user-presentable failure.
pub(crate) fn classify_api_error(err: &ApiError) -> NetworkFailure {
    match err {
        ApiError::Http(inner) => classify_failure(inner),
        ApiError::Body(detail) => classify_text(detail.clone()),
    }
}

/// Classify any error by inspecting its full source chain.
pub(crate) fn classify_failure(err: &(dyn Error + 'static)) -> NetworkFailure {
    classify_text(describe_failure(err))
}

/// Diagnostic text for a transport error. Timeouts always mention
/// "timed out", even when reqwest's own message does not.
pub(crate) fn describe_failure(err: &(dyn Error + 'static)) -> String {
    let mut detail = failure_description(err);
    if is_reqwest_timeout(err) && !detail.contains("timed out") {
        detail.push_str(": operation timed out");
    }
    detail
}

fn classify_text(detail: String) -> NetworkFailure {
    let lowered = detail.to_lowercase();
    if HOST_RESOLUTION_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        NetworkFailure::HostUnreachable
    } else if detail.contains("timed out") || detail.contains("refused") {
        NetworkFailure::ServerUnreachable(detail)
    } else {
        NetworkFailure::Other(detail)
    }
}

/// Join the messages of an error and its sources with `": "`, skipping
/// messages already included by an outer error.
fn failure_description(err: &(dyn Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !text.is_empty() && !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = inner.source();
    }
    description
}

fn is_reqwest_timeout(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<reqwest::Error>()
        .is_some_and(reqwest::Error::is_timeout)
}
