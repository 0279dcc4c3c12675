//! HTTP transport helpers for the completion exchange.

use reqwest::header::CONTENT_TYPE;

use crate::api::classify::describe_failure;
use crate::api::outcome::SUCCESS_STATUS;
use crate::error::ApiError;
use crate::types::ChatRequest;

/// Status code plus body text of a received response.
#[derive(Debug)]
pub(super) struct RawResponse {
    pub(super) status: u16,
    /// `None` when the body of a non-200 response could not be read.
    pub(super) body: Option<String>,
}

/// Build the default HTTP client. No timeout is set; transport defaults apply.
pub(super) fn build_http_client() -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .user_agent(concat!("askgpt/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// POST `request` as JSON to `url` and read the full response body.
pub(super) async fn post_json(
    http: &reqwest::Client,
    url: &str,
    credential: &str,
    request: &ChatRequest,
) -> Result<RawResponse, ApiError> {
    let response = http
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(credential)
        .json(request)
        .send()
        .await?;

    let status = response.status().as_u16();
    match response.text().await {
        Ok(text) => Ok(RawResponse {
            status,
            body: Some(text),
        }),
        // A broken success body is a transport failure; a broken error body
        // only loses the error message.
        Err(err) if status == SUCCESS_STATUS => Err(ApiError::Body(describe_failure(&err))),
        Err(_) => Ok(RawResponse { status, body: None }),
    }
}
