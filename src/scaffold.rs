//! Materializes a project skeleton on disk from the static tables in
//! [`crate::layout`].
//!
//! Single linear pass: validate the name, create the root and its
//! subdirectories, then write every file entry. Directory creation tolerates
//! pre-existing directories; files are overwritten unconditionally. There is
//! no rollback: anything written before a failure stays on disk.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::{self, Content};

/// Create the full project skeleton under `destination/name`.
///
/// Returns the project root on success.
///
/// # Errors
///
/// Returns an error if `name` is not usable as a directory name, or if any
/// directory creation or file write fails. Entries created before the
/// failure point remain on disk.
pub fn init_project(name: &str, destination: &Path) -> Result<PathBuf> {
    validate_name(name)?;

    let root = destination.join(name);
    fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create project root: {}", root.display()))?;

    for folder in layout::FOLDERS {
        fs::create_dir_all(root.join(folder))
            .with_context(|| format!("Failed to create directory: {}", folder))?;
    }

    for spec in layout::FILES {
        let full_path = root.join(spec.path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create parent directory of: {}", spec.path))?;
        }

        let content = match spec.content {
            Content::Literal(text) => text.to_string(),
            Content::Template(template) => template.render(name),
        };

        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;
    }

    Ok(root)
}

/// Resolve the project root to an absolute path for display.
///
/// The root may not exist yet, so this joins against the current directory
/// instead of canonicalizing.
pub fn resolved_root(name: &str, destination: &Path) -> Result<PathBuf> {
    let root = destination.join(name);
    if root.is_absolute() {
        Ok(root)
    } else {
        Ok(std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join(root))
    }
}

/// A project name becomes a directory name, so it must be a single path
/// component.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Project name must not be empty");
    }
    if name == "." || name == ".." {
        bail!("Project name must not be '{}'", name);
    }
    if name.contains('/') || name.contains('\\') {
        bail!("Project name must not contain path separators: {}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_empty_name() {
        let temp = TempDir::new().unwrap();
        assert!(init_project("", temp.path()).is_err());
    }

    #[test]
    fn test_rejects_name_with_separator() {
        let temp = TempDir::new().unwrap();
        assert!(init_project("nested/project", temp.path()).is_err());
        assert!(init_project("nested\\project", temp.path()).is_err());
        assert!(init_project("..", temp.path()).is_err());
    }

    #[test]
    fn test_invalid_name_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let _ = init_project("a/b", temp.path());
        assert!(
            fs::read_dir(temp.path()).unwrap().next().is_none(),
            "Validation failure must precede any filesystem effect"
        );
    }

    #[test]
    fn test_returns_project_root() -> Result<()> {
        let temp = TempDir::new()?;
        let root = init_project("demo", temp.path())?;
        assert_eq!(root, temp.path().join("demo"));
        assert!(root.is_dir());
        Ok(())
    }

    #[test]
    fn test_resolved_root_is_absolute() -> Result<()> {
        let root = resolved_root("demo", Path::new("relative/dest"))?;
        assert!(root.is_absolute());
        assert!(root.ends_with("relative/dest/demo"));
        Ok(())
    }
}
