//! Common test utilities for Bundlesmith integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// A complete bundle document, as the model would produce it
#[allow(dead_code)]
pub fn sample_bundle_json() -> &'static str {
    r#"{
        "metadata": {
            "name": "todo-app",
            "version": "1.0.0",
            "description": "A todo list application",
            "created_at": "2025-08-25T12:00:00Z"
        },
        "structure": {
            "directories": ["templates", "static"],
            "files": {
                "app.py": {"type": "python", "content": "from flask import Flask\napp = Flask(__name__)\n"},
                "templates/index.html": {"type": "html", "content": "<html><body>todo</body></html>"}
            }
        },
        "dependencies": {
            "python": ["flask", "flask-sqlalchemy"],
            "frontend": ["htmx@1.9.10"]
        },
        "database": {"type": "sqlite", "models": {}},
        "routes": {
            "/": {"methods": ["GET"], "handler": "index", "template": "index.html"}
        },
        "features": ["crud", "dashboard"],
        "config": {"port": 5000, "debug": true},
        "tests": {
            "unit_tests": {"test_app.py": {"content": "def test_ok():\n    assert True\n"}},
            "integration_tests": {}
        }
    }"#
}
