//! Single source of truth for the generated project layout.
//!
//! This module defines WHAT gets created. It has no I/O and no business
//! logic: two compile-time tables (directories and files) consumed by
//! [`crate::scaffold`].
//!
//! # Generated Layout
//!
//! ```text
//! <root>/
//! ├── README.md            # Rendered from template (project name substituted)
//! ├── requirements.txt     # Python dependencies
//! ├── config.yaml          # Minimal model config
//! ├── .env.example         # Rendered from template (project name substituted)
//! ├── notebooks/
//! │   └── eda.ipynb        # Empty placeholder notebook
//! ├── src/
//! │   ├── train.py
//! │   ├── evaluate.py
//! │   ├── predict.py
//! │   ├── model.py
//! │   ├── features.py
//! │   └── api_client.py
//! ├── app/
//! │   └── main.py
//! ├── data/
//! ├── scripts/
//! ├── docker/
//! │   └── Dockerfile
//! └── mlruns/
//! ```

use std::path::Path;

/// Placeholder token replaced with the project name in template entries.
pub const NAME_TOKEN: &str = "{{name}}";

// =============================================================================
// Embedded Templates
// =============================================================================

const README_TEMPLATE: &str = include_str!("../resources/templates/README.md.tmpl");
const ENV_TEMPLATE: &str = include_str!("../resources/templates/env.example.tmpl");

// =============================================================================
// Static Tables
// =============================================================================

/// Directories created under the project root, in creation order.
pub const FOLDERS: &[&str] = &[
    "notebooks",
    "src",
    "app",
    "data",
    "scripts",
    "docker",
    "mlruns",
];

/// A file whose content is produced by substituting the project name into a
/// fixed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Readme,
    EnvExample,
}

impl Template {
    /// Render this template with the project name substituted for
    /// [`NAME_TOKEN`].
    pub fn render(&self, project_name: &str) -> String {
        let source = match self {
            Template::Readme => README_TEMPLATE,
            Template::EnvExample => ENV_TEMPLATE,
        };
        source.replace(NAME_TOKEN, project_name)
    }
}

/// Content specification for one generated file.
#[derive(Debug, Clone, Copy)]
pub enum Content {
    /// Fixed bytes, written as-is. `Literal("")` creates an empty file.
    Literal(&'static str),
    /// Rendered by substituting the project name.
    Template(Template),
}

/// One entry of the generated file table.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    /// Path relative to the project root.
    pub path: &'static str,
    pub content: Content,
}

/// Files created under the project root.
///
/// Entries are independent of each other; every parent directory is either
/// the project root or listed in [`FOLDERS`].
pub const FILES: &[FileSpec] = &[
    FileSpec {
        path: "README.md",
        content: Content::Template(Template::Readme),
    },
    FileSpec {
        path: "requirements.txt",
        content: Content::Literal("pandas\nnumpy\nscikit-learn\nxgboost\nmlflow\nfastapi\n"),
    },
    FileSpec {
        path: "config.yaml",
        content: Content::Literal("model:\n  type: xgboost\n  learning_rate: 0.1\n"),
    },
    FileSpec {
        path: ".env.example",
        content: Content::Template(Template::EnvExample),
    },
    FileSpec {
        path: "src/train.py",
        content: Content::Literal("# Train script placeholder"),
    },
    FileSpec {
        path: "src/evaluate.py",
        content: Content::Literal("# Evaluate script placeholder"),
    },
    FileSpec {
        path: "src/predict.py",
        content: Content::Literal("# Predict script placeholder"),
    },
    FileSpec {
        path: "src/model.py",
        content: Content::Literal("# Model definitions"),
    },
    FileSpec {
        path: "src/features.py",
        content: Content::Literal("# Feature engineering"),
    },
    FileSpec {
        path: "src/api_client.py",
        content: Content::Literal("# External API interface"),
    },
    FileSpec {
        path: "app/main.py",
        content: Content::Literal("# FastAPI or Streamlit app"),
    },
    FileSpec {
        path: "notebooks/eda.ipynb",
        content: Content::Literal(""),
    },
    FileSpec {
        path: "docker/Dockerfile",
        content: Content::Literal("# Base Dockerfile"),
    },
];

/// Returns true when `path`'s parent is the project root or a [`FOLDERS`]
/// entry. Every [`FILES`] entry must satisfy this.
pub fn parent_is_covered(path: &str) -> bool {
    match Path::new(path).parent() {
        None => false,
        Some(parent) if parent == Path::new("") => true,
        Some(parent) => parent.to_str().map_or(false, |p| FOLDERS.contains(&p)),
    }
}
