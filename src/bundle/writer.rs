//! Bundle persistence and companion script output
//!
//! Writes the extracted bundle pretty-printed to its output path and drops a
//! fixed-content `reconstitutor.py` next to it, so a bundle can be expanded
//! on machines that only have Python available.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::error::{self, Result};

/// File name of the emitted companion script
pub const RECONSTITUTOR_FILE_NAME: &str = "reconstitutor.py";

/// Python counterpart of `bundlesmith reconstitute`, kept dependency-free
const RECONSTITUTOR_SCRIPT: &str = r##"#!/usr/bin/env python3
"""Reconstitute a project from a JSON bundle produced by bundlesmith."""
import json
import os
import shutil
import sys
from datetime import datetime


def create_project_from_bundle(bundle_path):
    with open(bundle_path, "r", encoding="utf-8") as f:
        bundle = json.load(f)

    project_name = bundle["metadata"]["name"]
    timestamp = datetime.now().strftime("%Y%m%d_%H%M%S")
    project_dir = f"{project_name}_{timestamp}"

    if os.path.exists(project_dir):
        shutil.rmtree(project_dir)
    os.makedirs(project_dir)
    print(f"Created project directory: {project_dir}")

    for directory in bundle["structure"].get("directories", []):
        os.makedirs(os.path.join(project_dir, directory), exist_ok=True)
        print(f"Created directory: {directory}")

    for filepath, file_info in bundle["structure"].get("files", {}).items():
        full_path = os.path.join(project_dir, filepath)
        parent = os.path.dirname(full_path)
        if parent:
            os.makedirs(parent, exist_ok=True)
        with open(full_path, "w", encoding="utf-8") as f:
            f.write(file_info["content"])
        print(f"Created file: {filepath}")

    with open(os.path.join(project_dir, "requirements.txt"), "w", encoding="utf-8") as f:
        for dep in bundle.get("dependencies", {}).get("python", []):
            f.write(f"{dep}\n")
    print("Created requirements.txt")

    readme = f"# {project_name}\n\n{bundle['metadata'].get('description', '')}\n\n## Features\n"
    for feature in bundle.get("features", []):
        readme += f"- {feature}\n"
    readme += "\n## Installation\n```\npip install -r requirements.txt\npython app.py\n```\n"
    with open(os.path.join(project_dir, "README.md"), "w", encoding="utf-8") as f:
        f.write(readme)
    print("Created README.md")

    print(f"\nProject created in {project_dir}")
    print("To run the application:")
    print(f"  cd {project_dir}")
    print("  pip install -r requirements.txt")
    print("  python app.py")


if __name__ == "__main__":
    if len(sys.argv) < 2:
        print("Usage: python reconstitutor.py <bundle_file.json>")
        sys.exit(1)
    create_project_from_bundle(sys.argv[1])
"##;

/// Name declared in the bundle's metadata
pub fn bundle_name(bundle: &Value) -> Result<&str> {
    bundle
        .get("metadata")
        .and_then(|metadata| metadata.get("name"))
        .and_then(Value::as_str)
        .ok_or_else(|| error::bundle::missing_field("metadata.name"))
}

/// Default output path: `<name>_bundle_<timestamp>.json` in the current directory
pub fn default_output_path(bundle: &Value, now: DateTime<Local>) -> Result<PathBuf> {
    let name = bundle_name(bundle)?;
    Ok(PathBuf::from(format!(
        "{}_bundle_{}.json",
        name,
        now.format("%Y%m%d_%H%M%S")
    )))
}

/// Write the bundle pretty-printed to `path`, creating parent directories
pub fn save_bundle(bundle: &Value, path: &Path) -> Result<()> {
    let pretty = serde_json::to_string_pretty(bundle)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
        }
    }
    std::fs::write(path, pretty)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

/// Write the companion script into `dir`, returning its path
pub fn write_reconstitutor(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(RECONSTITUTOR_FILE_NAME);
    std::fs::write(&path, RECONSTITUTOR_SCRIPT)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BundlesmithError;
    use chrono::TimeZone;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path_embeds_name_and_timestamp() {
        let bundle = json!({"metadata": {"name": "todo-app"}});
        let now = Local.with_ymd_and_hms(2025, 8, 25, 14, 30, 5).unwrap();
        let path = default_output_path(&bundle, now).unwrap();
        assert_eq!(path.to_string_lossy(), "todo-app_bundle_20250825_143005.json");
    }

    #[test]
    fn test_default_output_path_matches_timestamp_pattern() {
        let bundle = json!({"metadata": {"name": "x"}});
        let path = default_output_path(&bundle, Local::now()).unwrap();
        let pattern = regex::Regex::new(r"^x_bundle_\d{8}_\d{6}\.json$").unwrap();
        assert!(pattern.is_match(&path.to_string_lossy()));
    }

    #[test]
    fn test_default_output_path_requires_name() {
        let bundle = json!({"metadata": {}});
        let err = default_output_path(&bundle, Local::now()).unwrap_err();
        assert!(matches!(err, BundlesmithError::BundleMissingField { .. }));

        let bundle = json!({"metadata": {"name": 42}});
        let err = default_output_path(&bundle, Local::now()).unwrap_err();
        assert!(matches!(err, BundlesmithError::BundleMissingField { .. }));
    }

    #[test]
    fn test_save_bundle_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bundle.json");
        let bundle = json!({
            "metadata": {"name": "app", "version": "1.0.0"},
            "structure": {"directories": [], "files": {"app.py": {"type": "python", "content": "x = 1\n"}}},
            "features": ["auth", "crud"]
        });

        save_bundle(&bundle, &path).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, bundle);
    }

    #[test]
    fn test_save_bundle_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bundles/new/app.json");
        let bundle = json!({"metadata": {"name": "app"}});

        save_bundle(&bundle, &path).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, bundle);
    }

    #[test]
    fn test_write_reconstitutor_content() {
        let temp = TempDir::new().unwrap();
        let path = write_reconstitutor(temp.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), RECONSTITUTOR_FILE_NAME);
        let script = std::fs::read_to_string(&path).unwrap();
        assert!(script.contains("def create_project_from_bundle"));
        assert!(script.contains("requirements.txt"));
        assert!(script.contains("README.md"));
    }
}
