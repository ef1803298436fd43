//! Preview server command.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use folio_archive::Packager;
use folio_site::{ImageLinks, SystemClock};
use tower_http::services::ServeDir;

use crate::config::ConfigFile;

/// Run the preview command.
pub async fn run(
    config_path: &Path,
    profile: Option<PathBuf>,
    port: u16,
    open_browser: bool,
) -> Result<()> {
    let config = ConfigFile::load(config_path)?;
    let profile = profile.unwrap_or_else(|| config.site.profile.clone());
    let dir = config.site.preview_dir.clone();

    let wizard = super::wizard_from_profile(&profile)?;
    let record = wizard.preview_record()?;

    let packager = Packager::new(Arc::new(SystemClock), config.package_options(Some(false)));
    let site = packager.assemble(&record, ImageLinks::Inline)?;

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    site.write_to_dir(&dir)?;
    tracing::debug!("Wrote preview site to {}", dir.display());

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Previewing {} at http://{}", profile.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    if open_browser {
        let url = format!("http://{}", addr);
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
