//! Bundle data model
//!
//! A bundle is the JSON document describing a complete generated application.
//! Generation keeps the model's JSON untyped (see [`extract`]) so the written
//! file is byte-for-byte what the model produced; the typed model here is only
//! used when reconstituting a bundle from disk.

pub mod extract;
pub mod materialize;
pub mod writer;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{self, Result};

/// A generated application bundle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bundle {
    pub metadata: Metadata,
    pub structure: Structure,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub database: Option<Value>,
    #[serde(default)]
    pub routes: BTreeMap<String, Route>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub config: BTreeMap<String, Value>,
    #[serde(default)]
    pub tests: Option<TestSuites>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Structure {
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(default)]
    pub files: BTreeMap<String, FileEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileEntry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Route {
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestSuites {
    #[serde(default)]
    pub unit_tests: BTreeMap<String, TestFile>,
    #[serde(default)]
    pub integration_tests: BTreeMap<String, TestFile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestFile {
    pub content: String,
}

impl Bundle {
    /// Load a bundle from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(error::fs::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| error::bundle::parse_failed(path.display().to_string(), e.to_string()))
    }
}
