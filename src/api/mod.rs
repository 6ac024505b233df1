//! Anthropic Messages API client
//!
//! Blocking client built on `reqwest`; responses are always requested as a
//! stream and decoded by [`stream`]. One request per generation, no retries.

pub mod stream;

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use serde::Serialize;

use crate::error::{self, Result};

/// Model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 64_000;
const TEMPERATURE: f32 = 0.5;

/// Request body for the Messages API
#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    pub(crate) fn new(model: &'a str, system: &'a str, description: &'a str) -> Self {
        Self {
            model,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: true,
            system,
            messages: vec![Message {
                role: "user",
                content: description,
            }],
        }
    }
}

/// Anthropic API client
pub struct Client {
    api_key: String,
    model: String,
    http: HttpClient,
}

impl Client {
    /// Create a new client for the given API key and model
    pub fn new(api_key: String, model: String) -> Result<Self> {
        // Generations routinely exceed reqwest's default 30s timeout,
        // so only the connect phase is bounded.
        let http = HttpClient::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(None)
            .build()
            .map_err(|e| error::api::client_build_failed(e.to_string()))?;

        Ok(Self {
            api_key,
            model,
            http,
        })
    }

    /// Model this client generates with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a generation request and collect the streamed text into a String
    pub fn stream_completion(&self, system: &str, description: &str) -> Result<String> {
        let request = MessagesRequest::new(&self.model, system, description);

        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .map_err(|e| error::api::request_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(error::api::bad_status(status.as_u16(), body));
        }

        stream::collect_text(response)
    }
}
