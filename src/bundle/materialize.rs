//! Expanding a bundle into a real project directory
//!
//! Native counterpart of the emitted `reconstitutor.py`: creates the declared
//! directories and files, then derives `requirements.txt` and `README.md`
//! from the bundle's dependencies and metadata. An existing destination
//! directory is replaced, matching the companion script.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};

use crate::bundle::Bundle;
use crate::error::{self, Result};
use crate::progress::FileProgress;

/// What materialization produced
#[derive(Debug)]
pub struct MaterializeReport {
    /// Root of the created project
    pub project_dir: PathBuf,
    /// Number of bundle files written (excluding derived files)
    pub files_written: usize,
}

/// Expand `bundle` under `dest`, or `<name>_<timestamp>` when `dest` is None
pub fn materialize(
    bundle: &Bundle,
    dest: Option<&Path>,
    now: DateTime<Local>,
) -> Result<MaterializeReport> {
    let project_dir = match dest {
        Some(dir) => dir.to_path_buf(),
        None => default_project_dir(bundle, now),
    };

    // Model output is untrusted; refuse entries that would land outside
    // the project directory before touching the file system.
    for dir in &bundle.structure.directories {
        ensure_relative(dir)?;
    }
    for file in bundle.structure.files.keys() {
        ensure_relative(file)?;
    }

    if project_dir.exists() {
        std::fs::remove_dir_all(&project_dir)?;
    }
    std::fs::create_dir_all(&project_dir)?;

    for dir in &bundle.structure.directories {
        std::fs::create_dir_all(project_dir.join(dir))?;
    }

    let progress = FileProgress::new(bundle.structure.files.len() as u64);
    for (rel_path, entry) in &bundle.structure.files {
        let target = project_dir.join(rel_path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &entry.content)
            .map_err(|e| error::fs::write_failed(target.display().to_string(), e.to_string()))?;
        progress.update(rel_path);
    }
    progress.finish();

    write_requirements(bundle, &project_dir)?;
    write_readme(bundle, &project_dir)?;

    Ok(MaterializeReport {
        project_dir,
        files_written: bundle.structure.files.len(),
    })
}

/// Default project directory: `<name>_<timestamp>` in the current directory
pub fn default_project_dir(bundle: &Bundle, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}",
        bundle.metadata.name,
        now.format("%Y%m%d_%H%M%S")
    ))
}

fn ensure_relative(path: &str) -> Result<()> {
    let candidate = Path::new(path);
    let escapes = candidate.is_absolute()
        || candidate
            .components()
            .any(|component| matches!(component, Component::ParentDir | Component::Prefix(_)));
    if escapes {
        return Err(error::bundle::unsafe_path(path));
    }
    Ok(())
}

fn write_requirements(bundle: &Bundle, project_dir: &Path) -> Result<()> {
    let mut content = String::new();
    if let Some(python_deps) = bundle.dependencies.get("python") {
        for dep in python_deps {
            content.push_str(dep);
            content.push('\n');
        }
    }
    let path = project_dir.join("requirements.txt");
    std::fs::write(&path, content)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

fn write_readme(bundle: &Bundle, project_dir: &Path) -> Result<()> {
    let mut readme = format!(
        "# {}\n\n{}\n\n## Features\n",
        bundle.metadata.name,
        bundle.metadata.description.as_deref().unwrap_or_default()
    );
    for feature in &bundle.features {
        readme.push_str(&format!("- {}\n", feature));
    }
    readme.push_str("\n## Installation\n```\npip install -r requirements.txt\npython app.py\n```\n");

    let path = project_dir.join("README.md");
    std::fs::write(&path, readme)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BundlesmithError;
    use tempfile::TempDir;

    fn sample_bundle() -> Bundle {
        serde_json::from_str(
            r#"{
                "metadata": {"name": "todo-app", "description": "A todo list"},
                "structure": {
                    "directories": ["templates", "static"],
                    "files": {
                        "app.py": {"type": "python", "content": "print('hi')\n"},
                        "templates/index.html": {"type": "html", "content": "<html></html>"}
                    }
                },
                "dependencies": {"python": ["flask", "flask-sqlalchemy"]},
                "features": ["auth", "crud"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_materialize_creates_tree() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");

        let report = materialize(&sample_bundle(), Some(&dest), Local::now()).unwrap();
        assert_eq!(report.project_dir, dest);
        assert_eq!(report.files_written, 2);

        assert!(dest.join("templates").is_dir());
        assert!(dest.join("static").is_dir());
        assert_eq!(
            std::fs::read_to_string(dest.join("app.py")).unwrap(),
            "print('hi')\n"
        );
        assert_eq!(
            std::fs::read_to_string(dest.join("templates/index.html")).unwrap(),
            "<html></html>"
        );
    }

    #[test]
    fn test_materialize_derives_requirements_and_readme() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");
        materialize(&sample_bundle(), Some(&dest), Local::now()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.join("requirements.txt")).unwrap(),
            "flask\nflask-sqlalchemy\n"
        );

        let readme = std::fs::read_to_string(dest.join("README.md")).unwrap();
        assert!(readme.starts_with("# todo-app"));
        assert!(readme.contains("A todo list"));
        assert!(readme.contains("- auth"));
        assert!(readme.contains("- crud"));
        assert!(readme.contains("pip install -r requirements.txt"));
    }

    #[test]
    fn test_materialize_replaces_existing_dir() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("stale.txt"), "old").unwrap();

        materialize(&sample_bundle(), Some(&dest), Local::now()).unwrap();
        assert!(!dest.join("stale.txt").exists());
        assert!(dest.join("app.py").exists());
    }

    #[test]
    fn test_default_project_dir_name() {
        use chrono::TimeZone;
        let now = Local.with_ymd_and_hms(2025, 8, 25, 14, 30, 5).unwrap();
        let dir = default_project_dir(&sample_bundle(), now);
        assert_eq!(dir.to_string_lossy(), "todo-app_20250825_143005");
    }

    #[test]
    fn test_materialize_rejects_parent_traversal() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");

        let mut bundle = sample_bundle();
        bundle.structure.files.insert(
            "../evil.txt".to_string(),
            crate::bundle::FileEntry {
                kind: None,
                content: "nope".to_string(),
            },
        );

        let err = materialize(&bundle, Some(&dest), Local::now()).unwrap_err();
        assert!(matches!(err, BundlesmithError::UnsafeBundlePath { .. }));
        assert!(!temp.path().join("evil.txt").exists());
    }

    #[test]
    fn test_materialize_rejects_absolute_paths() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");

        let mut bundle = sample_bundle();
        bundle
            .structure
            .directories
            .push("/etc/something".to_string());

        let err = materialize(&bundle, Some(&dest), Local::now()).unwrap_err();
        assert!(matches!(err, BundlesmithError::UnsafeBundlePath { .. }));
    }
}
