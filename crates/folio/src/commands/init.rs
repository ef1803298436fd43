//! Create a starter config and profile.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    write_starter(config_path, Path::new("portfolio.yaml"), yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Edit portfolio.yaml, then run 'folio build' or 'folio preview'.");

    Ok(())
}

fn write_starter(config_path: &Path, profile_path: &Path, yes: bool) -> Result<()> {
    for (path, content) in [(config_path, DEFAULT_CONFIG), (profile_path, DEFAULT_PROFILE)] {
        if path.exists() && !yes {
            tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
            continue;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
    }

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Profile used by `folio build` and `folio preview`
profile = "portfolio.yaml"

# Directory the archive is written to
output = "."

# Directory the preview site is written to
preview_dir = ".folio-preview"

[build]
# Minify the theme stylesheet
minify = false

# Ship DEPLOY.md, LICENSE and .gitignore
include_docs = true

# Ship responsive.css and utils.js
include_extras = true

# Pause before packaging (milliseconds)
progress_delay_ms = 0
"#;

const DEFAULT_PROFILE: &str = r#"# Folio profile
#
# Themes: modern, minimalist, creative, dark, gradient, neon, ocean, sunset,
# forest, royal, monochrome, pastel

theme: modern

personal:
  name: Your Name
  title: Software Developer
  about: A short paragraph about who you are and what you build.
  email: you@example.com
  location: ""
  github: ""
  linkedin: ""

# photo: photo.jpg

skills:
  - name: Rust
    level: Advanced
  - name: SQL
    level: Intermediate

projects:
  - name: First Project
    technologies: Rust, Tokio
    description: What it does and why it matters.
    source_url: ""
    # image: screenshots/first.png

features:
  include_contact: true
  include_resume: false
"#;
