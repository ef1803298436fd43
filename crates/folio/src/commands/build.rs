//! Profile-to-archive build command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use folio_archive::Packager;
use folio_site::SystemClock;

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    profile: Option<PathBuf>,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> Result<()> {
    tracing::info!("Building portfolio...");

    let config = ConfigFile::load(config_path)?;
    let profile = profile.unwrap_or_else(|| config.site.profile.clone());
    let output = output.unwrap_or_else(|| config.site.output.clone());

    let mut wizard = super::wizard_from_profile(&profile)?;
    tracing::debug!(
        "Replayed {} ({} skills, {} projects)",
        profile.display(),
        wizard.skills().len(),
        wizard.projects().len()
    );

    let packager = Packager::new(Arc::new(SystemClock), config.package_options(minify));
    let path = super::generate(&mut wizard, &packager, &output).await?;

    tracing::info!("Build complete! Portfolio written to {}", path.display());

    Ok(())
}
