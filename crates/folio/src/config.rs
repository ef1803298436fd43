//! Configuration file (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use folio_archive::PackageOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Profile used by `build` and `preview`
    #[serde(default = "default_profile")]
    pub profile: PathBuf,
    /// Directory the archive is written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Directory the preview site is written to
    #[serde(default = "default_preview_dir")]
    pub preview_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            output: default_output(),
            preview_dir: default_preview_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default)]
    pub minify: bool,
    #[serde(default = "default_true")]
    pub include_docs: bool,
    #[serde(default = "default_true")]
    pub include_extras: bool,
    #[serde(default)]
    pub progress_delay_ms: u64,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: false,
            include_docs: true,
            include_extras: true,
            progress_delay_ms: 0,
        }
    }
}

fn default_profile() -> PathBuf {
    PathBuf::from("portfolio.yaml")
}
fn default_output() -> PathBuf {
    PathBuf::from(".")
}
fn default_preview_dir() -> PathBuf {
    PathBuf::from(".folio-preview")
}
fn default_true() -> bool {
    true
}

impl ConfigFile {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            let config: ConfigFile = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(ConfigFile::default())
    }

    /// Packaging options, with an optional minify override from the command line.
    pub fn package_options(&self, minify: Option<bool>) -> PackageOptions {
        PackageOptions {
            include_docs: self.build.include_docs,
            include_extras: self.build.include_extras,
            minify: minify.unwrap_or(self.build.minify),
            progress_delay: Duration::from_millis(self.build.progress_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = ConfigFile::load(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(config.site.profile, PathBuf::from("portfolio.yaml"));
        assert_eq!(config.site.output, PathBuf::from("."));
        assert!(config.build.include_docs);
        assert!(!config.build.minify);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            "[site]\noutput = \"dist\"\n\n[build]\nminify = true\nprogress_delay_ms = 250\n",
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        let options = config.package_options(None);

        assert_eq!(config.site.output, PathBuf::from("dist"));
        assert_eq!(config.site.preview_dir, PathBuf::from(".folio-preview"));
        assert!(options.minify);
        assert!(options.include_extras);
        assert_eq!(options.progress_delay, Duration::from_millis(250));
    }

    #[test]
    fn command_line_overrides_minify() {
        let mut config = ConfigFile::default();
        config.build.minify = true;

        assert!(!config.package_options(Some(false)).minify);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[build\nminify = ").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }
}
