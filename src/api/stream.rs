//! Server-sent event decoding for streamed Messages API responses
//!
//! The API answers with `event:`/`data:` line pairs. Only the `data:` payloads
//! matter here; `content_block_delta` events carry the text, `message_stop`
//! ends the stream and `error` events abort it.

use std::io::{BufRead, BufReader, Read};

use serde::Deserialize;

use crate::error::{self, Result};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StreamEvent {
    ContentBlockDelta { delta: ContentDelta },
    MessageStop,
    Error { error: ApiError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentDelta {
    TextDelta { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

/// Read a streamed response body to completion, concatenating all text deltas
pub fn collect_text<R: Read>(body: R) -> Result<String> {
    let mut text = String::new();
    let reader = BufReader::new(body);

    for line in reader.lines() {
        let line = line.map_err(|e| error::api::stream_failed(e.to_string()))?;
        let Some(payload) = line.strip_prefix("data:") else {
            continue;
        };

        // Events this client does not understand are skipped, matching how
        // the API documents forward compatibility.
        match serde_json::from_str::<StreamEvent>(payload.trim_start()) {
            Ok(StreamEvent::ContentBlockDelta {
                delta: ContentDelta::TextDelta { text: chunk },
            }) => text.push_str(&chunk),
            Ok(StreamEvent::MessageStop) => break,
            Ok(StreamEvent::Error { error }) => {
                return Err(error::api::stream_failed(format!(
                    "{}: {}",
                    error.kind, error.message
                )));
            }
            Ok(_) | Err(_) => {}
        }
    }

    Ok(text)
}
