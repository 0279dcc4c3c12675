//! askgpt: a single-turn chat completion client for OpenAI-compatible APIs.
//!
//! The crate resolves request parameters against configured defaults, sends
//! one `/chat/completions` request, and turns whatever happens into a
//! [`api::CompletionOutcome`] that can be shown to the user as-is.
//!
//! # Quick start
//!
//! ```no_run
//! use askgpt::api::{CompletionClient, RequestParameters};
//! use askgpt::config::load_config;
//!
//! # async fn example() {
//! let loaded = load_config(None);
//! let client = CompletionClient::new(loaded.client_config());
//! let params = RequestParameters::new("Hello!", 0.7, 512);
//! println!("{}", client.complete(&params).await);
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod error;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod types;
