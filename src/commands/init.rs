//! CLI-facing init command: progress output around the scaffold run.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use mlproject_init::{layout, scaffold};

/// Scaffold a new ML project named `name` under `path`.
pub fn execute(name: String, path: String) -> Result<()> {
    let destination = Path::new(&path);

    println!("🎨 Scaffolding ML project: {}", name);
    println!(
        "📁 Creating project in: {}",
        scaffold::resolved_root(&name, destination)?.display()
    );

    scaffold::init_project(&name, destination)?;

    println!(
        "   {} Created {} directories",
        "✓".green().bold(),
        layout::FOLDERS.len() + 1
    );
    println!(
        "   {} Wrote {} files",
        "✓".green().bold(),
        layout::FILES.len()
    );

    println!(
        "\n✨ {}",
        "Project structure generated successfully!".green()
    );
    println!("\nNext steps:");
    println!("  1. cd {}", name);
    println!("  2. pip install -r requirements.txt");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execute_scaffolds_project() -> Result<()> {
        let temp = TempDir::new()?;

        execute(
            "demo".to_string(),
            temp.path().to_str().unwrap().to_string(),
        )?;

        assert!(temp.path().join("demo/README.md").is_file());
        assert!(temp.path().join("demo/mlruns").is_dir());
        Ok(())
    }
}
