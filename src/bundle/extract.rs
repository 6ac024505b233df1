//! JSON bundle extraction from model responses
//!
//! Everything after the first `[JSON_BUNDLE]` delimiter is treated as a JSON
//! document. When extraction fails, the offending text is saved next to the
//! bundle output so the response can be inspected; nothing is retried.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::Local;
use regex::Regex;
use serde_json::Value;

use crate::error::{self, Result};

/// Delimiter marking the start of the JSON payload in a model response
pub const BUNDLE_DELIMITER: &str = "[JSON_BUNDLE]";

#[allow(clippy::expect_used)]
fn delimiter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\[JSON_BUNDLE\](.*)").expect("pattern is valid"))
}

/// Everything after the first delimiter, trimmed. None when the delimiter is absent.
pub fn split_payload(response: &str) -> Option<&str> {
    delimiter_pattern()
        .captures(response)
        .and_then(|captures| captures.get(1))
        .map(|payload| payload.as_str().trim())
}

/// Extracts bundles from raw responses, saving diagnostic artifacts on failure
pub struct Extractor {
    debug_dir: PathBuf,
}

impl Extractor {
    /// Create an extractor that writes diagnostic artifacts under `debug_dir`
    pub fn new(debug_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug_dir: debug_dir.into(),
        }
    }

    /// Extract the JSON bundle from a full model response.
    ///
    /// On a missing delimiter the full response is saved to
    /// `debug_response_<timestamp>.txt`; on a JSON parse failure the
    /// post-delimiter text is saved to `invalid_json_<timestamp>.txt`.
    pub fn extract(&self, response: &str) -> Result<Value> {
        let Some(payload) = split_payload(response) else {
            let path = self.save_artifact("debug_response", response)?;
            return Err(error::bundle::delimiter_not_found(
                path.display().to_string(),
            ));
        };

        match serde_json::from_str::<Value>(payload) {
            Ok(bundle) => Ok(bundle),
            Err(e) => {
                let path = self.save_artifact("invalid_json", payload)?;
                Err(error::bundle::invalid_json(
                    e.to_string(),
                    path.display().to_string(),
                ))
            }
        }
    }

    fn save_artifact(&self, prefix: &str, content: &str) -> Result<PathBuf> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.debug_dir.join(format!("{prefix}_{stamp}.txt"));
        write_artifact(&path, content)?;
        Ok(path)
    }
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
        }
    }
    std::fs::write(path, content)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}
